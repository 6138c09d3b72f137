pub mod console;
pub mod html;
pub mod writer;
