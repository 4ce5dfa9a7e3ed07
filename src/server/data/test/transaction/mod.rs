use super::*;

mod execute;
mod generated;
