use crate::capabilities::{BeaconRequest, Capabilities, Transport, TransportError};
use crate::domain::{ActivityRecord, CourseId, PageMetadata, Timestamp};
use std::rc::Rc;

/// Views shorter than this are not reported
pub const MIN_REPORTABLE_SECS: u64 = 5;

/// What happened when the recorder was asked to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The beacon was dispatched
    Sent { duration: u64 },
    /// Nothing sent; the record is kept for a later unload
    TooShort { duration: u64 },
    /// A beacon already went out for this page load
    AlreadySent,
}

/// Measures how long a page stays open and reports it once.
pub struct ActivityRecorder {
    /// `None` once the beacon has been dispatched
    record: Option<ActivityRecord>,
    start_time: Timestamp,
    endpoint: String,
    capabilities: Capabilities,
}

impl ActivityRecorder {
    /// Start timing a page view. Page metadata is captured here and never
    /// re-read.
    pub fn start(
        course_id: CourseId,
        metadata: PageMetadata,
        endpoint: impl Into<String>,
        capabilities: Capabilities,
    ) -> Self {
        let start_time = capabilities.clock.now();
        tracing::debug!(
            course_id = %course_id,
            page_url = %metadata.page_url,
            %start_time,
            "Activity recording started"
        );

        Self {
            record: Some(ActivityRecord::page_view(course_id, metadata)),
            start_time,
            endpoint: endpoint.into(),
            capabilities,
        }
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// The pending record, if it has not been sent yet
    pub fn record(&self) -> Option<&ActivityRecord> {
        self.record.as_ref()
    }

    pub fn is_sent(&self) -> bool {
        self.record.is_none()
    }

    /// Compute the elapsed time and, if long enough, dispatch the beacon
    /// without waiting for it.
    pub fn submit_activity(&mut self) -> SubmitOutcome {
        if self.record.is_none() {
            return SubmitOutcome::AlreadySent;
        }

        let duration = self.capabilities.clock.now().whole_secs_since(self.start_time);
        if duration < MIN_REPORTABLE_SECS {
            tracing::debug!(duration, "Activity too short to report");
            return SubmitOutcome::TooShort { duration };
        }

        let Some(record) = self.record.take() else {
            return SubmitOutcome::AlreadySent;
        };
        let record = record.with_duration(duration);

        let transport = Rc::clone(&self.capabilities.transport);
        let endpoint = self.endpoint.clone();

        tracing::info!(course_id = %record.course_id, duration, "Submitting activity");
        self.capabilities.spawner.spawn(Box::pin(async move {
            if let Err(e) = deliver(transport.as_ref(), &endpoint, &record).await {
                tracing::error!(course_id = %record.course_id, "Error recording activity: {}", e);
            }
        }));

        SubmitOutcome::Sent { duration }
    }
}

async fn deliver(
    transport: &dyn Transport,
    endpoint: &str,
    record: &ActivityRecord,
) -> Result<(), TransportError> {
    let request = BeaconRequest::json(endpoint, record)?;
    transport.post(request).await
}
