use anyhow::Result;
use mockito::{Server, ServerGuard};
use onet_web_services::OnetClient;

pub const USERNAME: &str = "onet_user";
pub const PASSWORD: &str = "s3cret";
// base64("onet_user:s3cret")
pub const AUTHORIZATION: &str = "Basic b25ldF91c2VyOnMzY3JldA==";

/// A local stand-in for O*NET plus a client pointed at it.
pub struct TestEnvironment {
    pub server: ServerGuard,
    pub base_url: String,
    pub client: OnetClient,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let server = Server::new_async().await;
        let base_url = format!("{}/", server.url());

        let client = OnetClient::with_credentials(USERNAME, PASSWORD)?
            .set_base_url(Some(&base_url))
            .set_token(None);

        Ok(Self {
            server,
            base_url,
            client,
        })
    }

    /// The message prefix O*NET failures are reported with for `path`.
    pub fn call_prefix(&self, path: &str) -> String {
        format!("Call to {}{}", self.base_url, path)
    }
}

#[macro_export]
macro_rules! setup_test {
    () => {
        async {
            $crate::common::init_test_logging();
            $crate::common::TestEnvironment::new()
                .await
                .expect("Failed to create test environment")
        }
    };
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}
