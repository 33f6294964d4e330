pub use settle::*;

mod settle;
