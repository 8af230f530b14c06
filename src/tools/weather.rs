// ABOUTME: WeatherTool - current weather lookup backed by wttr.in.
// ABOUTME: Always resolves to a human-readable string, even on failure.

use async_trait::async_trait;

use crate::error::ToolError;
use crate::tool::Tool;

const WTTR_DEFAULT_BASE_URL: &str = "https://wttr.in";

/// Tool for looking up current weather conditions by city name.
pub struct WeatherTool {
    client: reqwest::Client,
    base_url: String,
}

impl Default for WeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherTool {
    /// Create a new WeatherTool with default settings.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .user_agent("nimbus/0.3.0")
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            base_url: WTTR_DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create with a custom reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: WTTR_DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn endpoint(&self, city: &str) -> String {
        format!(
            "{}/{}?format=%C+%t",
            self.base_url,
            urlencoding::encode(city)
        )
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Returns the current weather for the specified city."
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        let city = input.trim();

        let response = match self.client.get(self.endpoint(city)).send().await {
            Ok(resp) => resp,
            Err(_) => {
                return Ok(format!("Network error while fetching weather for {}.", city));
            }
        };

        if !response.status().is_success() {
            return Ok(format!(
                "Sorry, could not fetch weather for {} at the moment.",
                city
            ));
        }

        match response.text().await {
            Ok(body) => Ok(format!(
                "The current weather conditions in {} are: {}",
                city,
                body.trim()
            )),
            Err(_) => Ok(format!("Network error while fetching weather for {}.", city)),
        }
    }
}
