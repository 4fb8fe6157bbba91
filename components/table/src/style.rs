//! Stylesheets enqueued by the table components.

pub const TABLE: &str = ".table{border-collapse:collapse;width:100%}\
.table caption{text-align:left;font-weight:600;padding:.5em 0}\
.table-cell--center{text-align:center}\
.table-cell--right{text-align:right}\
.table-empty td{color:#646970;font-style:italic}\
.table--hover tbody tr:hover{background:#f0f6fc}";

pub const KEY_VALUE: &str = ".key-value-table th{width:30%;text-align:left;vertical-align:top}";
