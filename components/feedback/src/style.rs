//! Stylesheets enqueued by the feedback components.

pub const BADGE: &str = ".badge{display:inline-flex;align-items:center;gap:.25em;padding:.1em .5em;border-radius:1em;background:#f0f0f1;font-size:12px}\
.badge--small{font-size:11px}.badge--large{font-size:14px;padding:.25em .75em}\
.badge--publish,.badge--active,.badge--success{background:#edfaef;color:#00450c}\
.badge--draft,.badge--pending,.badge--warning{background:#fcf9e8;color:#614200}\
.badge--trash,.badge--error,.badge--inactive{background:#fcf0f1;color:#8a2424}\
.badge-icon{font-size:1em;width:1em;height:1em}";

pub const NOTICE: &str = ".notice-title{margin:.5em 0 0}";

pub const PROGRESS_BAR: &str = ".progress-bar{position:relative;height:1.5em;background:#f0f0f1;border-radius:3px;overflow:hidden}\
.progress-bar-fill{height:100%;background:#2271b1}\
.progress-bar-label{position:absolute;inset:0;text-align:center;line-height:1.5em;font-size:12px}";

pub const AVATAR: &str = ".user-avatar{display:inline-block;border-radius:50%;overflow:hidden;vertical-align:middle}\
.user-avatar--placeholder{display:inline-flex;align-items:center;justify-content:center;background:#c3c4c7;color:#fff;font-weight:600}";

pub const USER_CARD: &str = ".user-card{display:flex;gap:.75em;align-items:center}\
.user-card-details{display:flex;flex-direction:column}\
.user-card-roles{color:#646970;font-size:12px}";

pub const STAT: &str = ".stat{display:inline-flex;flex-direction:column;align-items:center;padding:.5em 1em}\
.stat-value{font-size:2em;font-weight:600;line-height:1.2}\
.stat-label{color:#646970}";
