mod batch;
mod common;
mod report;
