pub mod grade_chart;
pub mod help;
pub mod input_panel;
pub mod result_panel;
