mod common;
mod grading;
