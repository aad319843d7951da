use certify_notify::NotifyMessage;
use certify_types::{Role, StudentAuth, StudentLogin, StudentRegister, Token};
use tracing::info;

use crate::client::ApiClient;
use crate::endpoints::auth;
use crate::error::Result;
use crate::options::{RequestBody, RequestOptions};

impl ApiClient {
    /// 管理员登录（OAuth2 密码模式表单），成功后以管理员身份保存会话
    pub async fn login_admin(&self, username: &str, password: &str) -> Result<Token> {
        let options = RequestOptions::post()
            .body(RequestBody::form(&[("username", username), ("password", password)]))
            .skip_auth();

        let token: Token = self.send(auth::ADMIN_LOGIN, options).await?.json()?;
        self.start_session(&token, Role::Admin).await;
        Ok(token)
    }

    /// 学员登录，成功后以学员身份保存会话
    pub async fn login_student(&self, email: &str, password: &str) -> Result<Token> {
        let credentials = StudentLogin {
            email: email.to_string(),
            password: password.to_string(),
        };
        let options = RequestOptions::post()
            .body(RequestBody::json(&credentials)?)
            .skip_auth();

        let token: Token = self.send(auth::STUDENT_LOGIN, options).await?.json()?;
        self.start_session(&token, Role::Student).await;
        Ok(token)
    }

    pub async fn register_student(&self, student: &StudentRegister) -> Result<StudentAuth> {
        let options = RequestOptions::post()
            .body(RequestBody::json(student)?)
            .skip_auth();

        self.send(auth::STUDENT_REGISTER, options).await?.json()
    }

    /// 退出登录；会话不存在时同样视为成功
    pub async fn logout(&self) {
        self.session().clear_session();
        info!("Logged out");
        self.notify(NotifyMessage::success(&self.messages().logout))
            .await;
    }

    async fn start_session(&self, token: &Token, role: Role) {
        self.session().set_session(&token.access_token, role);
        info!(role = %role, "Logged in");
        self.notify(NotifyMessage::success(&self.messages().login))
            .await;
    }
}
