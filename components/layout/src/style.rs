//! Stylesheets and scripts enqueued by the layout components.

pub const CARD: &str = ".card{background:#fff;border:1px solid #c3c4c7;padding:0;max-width:none}\
.card-header{display:flex;align-items:center;gap:.5em;padding:.75em 1em;border-bottom:1px solid #f0f0f1}\
.card-title{margin:0;font-size:1.1em}\
.card-body{padding:1em}\
.card-footer{padding:.75em 1em;border-top:1px solid #f0f0f1;background:#f6f7f7}\
.card--warning{border-left:4px solid #dba617}\
.card--error{border-left:4px solid #d63638}\
.card--success{border-left:4px solid #00a32a}";

pub const MODAL: &str = ".modal[hidden]{display:none}\
.modal{position:fixed;inset:0;z-index:100000;display:flex;align-items:center;justify-content:center}\
.modal-backdrop{position:absolute;inset:0;background:rgba(0,0,0,.6)}\
.modal-dialog{position:relative;background:#fff;max-height:90vh;overflow:auto;box-shadow:0 3px 30px rgba(0,0,0,.2)}\
.modal--small .modal-dialog{width:min(400px,95vw)}\
.modal--medium .modal-dialog{width:min(640px,95vw)}\
.modal--large .modal-dialog{width:min(960px,95vw)}\
.modal-header{display:flex;justify-content:space-between;align-items:center;padding:1em;border-bottom:1px solid #dcdcde}\
.modal-title{margin:0}\
.modal-close{background:none;border:0;cursor:pointer}\
.modal-body{padding:1em}\
.modal-footer{padding:1em;border-top:1px solid #dcdcde;text-align:right}";

pub const MODAL_SCRIPT: &str = "document.addEventListener('click',function(e){\
var open=e.target.closest('[data-modal-open]');\
if(open){var m=document.getElementById(open.getAttribute('data-modal-open'));if(m){m.hidden=false;}return;}\
var close=e.target.closest('[data-modal-close]');\
if(close){var d=close.closest('.modal');if(d){d.hidden=true;}}});";

pub const LIST: &str = ".list{margin:0;padding-left:0;list-style:none}\
.list--ordered{padding-left:1.5em;list-style:decimal}\
.list-item{display:flex;gap:.5em;align-items:flex-start;margin:.25em 0}\
.list-empty{color:#646970;font-style:italic}";

pub const ACCORDION: &str = ".accordion-item{border:1px solid #dcdcde;margin-bottom:-1px}\
.accordion-title{cursor:pointer;padding:.75em 1em;font-weight:600}\
.accordion-content{padding:0 1em 1em}";

pub const DIVIDER: &str = ".divider{border:0;border-top:1px solid #dcdcde;margin:1.5em 0}\
.divider--labelled{display:flex;align-items:center;gap:1em;border:0}\
.divider--labelled::before,.divider--labelled::after{content:'';flex:1;border-top:1px solid #dcdcde}\
.divider-label{color:#646970}";
