mod common;
mod partition;
