use url::Url;

use crate::{FailureKind, FetchError};

/// Builders for the profiling backend's query-string GET endpoints, with
/// percent-encoding handled by the url crate.
#[derive(Debug, Clone)]
pub struct ApiRoutes {
    base: Url,
}

impl ApiRoutes {
    /// `base` is the server root, e.g. `http://localhost:4040`.
    pub fn new(base: Url) -> Result<Self, FetchError> {
        if base.cannot_be_a_base() {
            return Err(FetchError::new(
                FailureKind::InvalidUrl,
                format!("cannot use '{base}' as a server root"),
            ));
        }
        Ok(Self { base })
    }

    /// Caller-supplied render URL with the JSON format selector appended.
    pub fn render(url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("format", "json");
        url
    }

    /// Label list for the profiles matched by `query`.
    pub fn labels(&self, query: &str) -> Url {
        let mut url = self.endpoint("labels");
        url.query_pairs_mut().append_pair("query", query);
        url
    }

    /// Values of one label within the profiles matched by `query`.
    pub fn label_values(&self, label: &str, query: &str) -> Url {
        let mut url = self.endpoint("label-values");
        url.query_pairs_mut()
            .append_pair("label", label)
            .append_pair("query", query);
        url
    }

    /// Application names are the values of the reserved `__name__` label.
    pub fn names(&self) -> Url {
        let mut url = self.endpoint("label-values");
        url.query_pairs_mut().append_pair("label", "__name__");
        url
    }

    fn endpoint(&self, segment: &str) -> Url {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .expect("base validated at construction")
            .pop_if_empty()
            .push(segment);
        url
    }
}
