mod literal;
mod resolve;
mod util;
