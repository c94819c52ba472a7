use crate::error::{map_reqwest_error, ServiceError};
use crate::settings::ServiceSettings;
use crate::types::{DetailBody, JobStatus, RawJobStatus, RawRecord, Record};

/// Seam over the remote job service so the poller and handle can be exercised
/// against a canned implementation in tests.
#[async_trait::async_trait]
pub trait JobService: Send + Sync {
    async fn start_scrape(&self) -> Result<(), ServiceError>;
    async fn stop_scrape(&self) -> Result<(), ServiceError>;
    async fn scrape_status(&self) -> Result<JobStatus, ServiceError>;
    async fn fetch_records(&self) -> Result<Vec<Record>, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpJobService {
    client: reqwest::Client,
    settings: ServiceSettings,
}

impl HttpJobService {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ServiceError::Network(err.to_string()))?;
        Ok(Self { client, settings })
    }

    async fn post(&self, path: &str) -> Result<(), ServiceError> {
        let response = self
            .client
            .post(self.settings.endpoint(path))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl JobService for HttpJobService {
    async fn start_scrape(&self) -> Result<(), ServiceError> {
        self.post("scrape/").await
    }

    async fn stop_scrape(&self) -> Result<(), ServiceError> {
        self.post("stop-scrape/").await
    }

    async fn scrape_status(&self) -> Result<JobStatus, ServiceError> {
        let response = self
            .client
            .get(self.settings.endpoint("scraping-progress/"))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = check_status(response).await?;
        let raw: RawJobStatus = response.json().await.map_err(map_reqwest_error)?;
        Ok(raw.into())
    }

    async fn fetch_records(&self) -> Result<Vec<Record>, ServiceError> {
        let response = self
            .client
            .get(self.settings.endpoint("flares/"))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = check_status(response).await?;
        let raw: Vec<RawRecord> = response.json().await.map_err(map_reqwest_error)?;
        Ok(raw.into_iter().map(Record::from).collect())
    }
}

/// Maps a non-success response to `ServiceError::Status`, salvaging the
/// server's `detail` message when the body carries one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = match response.text().await {
        Ok(body) => serde_json::from_str::<DetailBody>(&body)
            .ok()
            .and_then(|parsed| parsed.detail),
        Err(_) => None,
    };
    Err(ServiceError::Status {
        code: status.as_u16(),
        detail,
    })
}
