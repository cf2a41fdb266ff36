pub mod gemini;
pub mod static_data;
