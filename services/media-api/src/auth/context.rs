use super::AuthMethod;

#[derive(Debug, Clone)]
pub struct UserContext {
    pub user_id: String,
    pub auth_method: AuthMethod,
}

impl UserContext {
    pub fn new(user_id: String, auth_method: AuthMethod) -> Self {
        Self {
            user_id,
            auth_method,
        }
    }
}
