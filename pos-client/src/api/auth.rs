use serde::de::IgnoredAny;
use shared::models::{LoginResponse, PinLoginRequest, UserInfo};

use super::PosClient;
use crate::{ClientResult, HttpClient};

impl<H: HttpClient> PosClient<H> {
    /// Cash-desk login by PIN; keeps the returned token for later calls
    pub async fn pin_login(&mut self, pin: &str) -> ClientResult<LoginResponse> {
        let req = PinLoginRequest { pin: pin.to_string() };
        let resp: LoginResponse = self.http.post("auth/pin", &req).await?;
        tracing::info!(user_id = resp.user.id, role = ?resp.user.role, "PIN login succeeded");
        self.http.set_token(Some(resp.token.clone()));
        self.user = Some(resp.user.clone());
        Ok(resp)
    }

    /// Log out. The local session is dropped even if the server call fails.
    pub async fn logout(&mut self) -> ClientResult<()> {
        let result = self.http.post_empty::<IgnoredAny>("auth/logout").await;
        self.http.set_token(None);
        self.user = None;
        result.map(|_| ())
    }

    /// Current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.http.get("auth/me").await
    }
}
