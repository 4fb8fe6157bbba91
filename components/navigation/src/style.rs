//! Stylesheets and scripts enqueued by the navigation components.

pub const BREADCRUMBS: &str = ".breadcrumbs-list{display:flex;flex-wrap:wrap;gap:.5em;list-style:none;margin:0 0 1em;padding:0}\
.breadcrumbs-separator{color:#8c8f94}\
.breadcrumbs-item--current{font-weight:600}";

pub const TABS: &str = ".tabs-panel[hidden]{display:none}\
.tabs-panel{padding:1em 0}\
.tabs-tab{cursor:pointer;background:none}";

pub const TABS_SCRIPT: &str = "document.addEventListener('click',function(e){\
var tab=e.target.closest('[role=tab]');if(!tab){return;}\
var list=tab.closest('[role=tablist]');if(!list){return;}\
list.querySelectorAll('[role=tab]').forEach(function(t){\
var on=t===tab;t.setAttribute('aria-selected',on?'true':'false');t.tabIndex=on?0:-1;\
t.classList.toggle('nav-tab-active',on);\
var p=document.getElementById(t.getAttribute('aria-controls'));if(p){p.hidden=!on;}});});";

pub const PAGINATION: &str = ".pagination{display:flex;gap:.25em;align-items:center;margin:1em 0}\
.pagination-link{display:inline-block;min-width:2em;padding:.25em .5em;text-align:center;border:1px solid #c3c4c7;text-decoration:none}\
.pagination-link--current{background:#2271b1;border-color:#2271b1;color:#fff}\
.pagination-ellipsis{padding:0 .25em}";

pub const SEARCH_BOX: &str = ".search-box{display:flex;gap:.25em;align-items:center}";
