pub mod charts;
pub mod entry_detail;
pub mod entry_form;
pub mod entry_table;
pub mod expense_insights;
pub mod field_input;
pub mod header;
pub mod income_dashboard;
pub mod income_reports;
pub mod login_page;
pub mod report_document;
pub mod resource_page;
pub mod toast;
