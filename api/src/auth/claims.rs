use db::models::user::Role;
use serde::{Deserialize, Serialize};
use services::access::Requester;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn id(&self) -> i64 {
        self.0.sub
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn requester(&self) -> Requester {
        Requester::new(self.0.sub, self.0.role)
    }
}
