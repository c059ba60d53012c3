use mockito::{Mock, Server, ServerGuard};

use crate::error::TestError;

/// Mock backend for a single test.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(TestSetup {
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server, to be used as the client's API URL.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

/// Create a [`TestSetup`], optionally registering mocks built from closures taking the server.
#[macro_export]
macro_rules! test_setup {
    () => {{
        $crate::TestSetup::new().await
    }};

    ($($mock:expr),+ $(,)?) => {{
        async {
            let mut setup = $crate::TestSetup::new().await?;
            $(
                let mock = ($mock)(&mut setup.server);
                setup.mocks.push(mock);
            )+

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
