use crate::server::data::user::{find_user_by_email, UserRepository};

use super::*;

mod create;
mod find_by_email;
