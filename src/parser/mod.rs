mod assembler;
mod scanner;
mod state;

pub use scanner::scan;
