//! Stylesheets enqueued by the form components.

pub const SELECT: &str = ".select{min-width:12em}.select[multiple]{min-height:6em}";

pub const CHOICE_GROUP: &str = ".choice-group{border:0;margin:0;padding:0}\
.choice-group-item{display:block;margin:.25em 0}\
.choice-group--inline .choice-group-item{display:inline-block;margin-right:1em}";

pub const FIELD: &str = ".field{margin:0 0 1em}\
.field-label{display:block;font-weight:600;margin-bottom:.25em}\
.field-required{color:#d63638;margin-left:.25em}\
.field-description{color:#646970;margin:.25em 0 0}\
.field--invalid .field-control input,.field--invalid .field-control select{border-color:#d63638}\
.field-error{color:#d63638;margin:.25em 0 0}";

pub const FORM: &str = ".form-submit{margin-top:1.5em}";
