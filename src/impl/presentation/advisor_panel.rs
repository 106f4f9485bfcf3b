use fractic_server_error::ServerError;
use tracing::warn;

use crate::{domain::usecases::advice_usecase::AdviceUsecase, entities::Debt};

pub const ADVISOR_GREETING: &str = "Hello! Let me analyse your debts and suggest the best \
    strategy for paying them back and saving money.";
pub const ADVICE_FALLBACK: &str = "The advisor could not be reached right now. Check your \
    connection and API key, then try again.";
const LOADING_INDICATOR: &str = "... analysing your debts";
const ACTION_HINT: &str = "Run `debts advice` to start the analysis.";

/// State of the advisory panel: the last advice shown and whether a request
/// is outstanding. While one is, further requests are refused.
#[derive(Debug)]
pub struct AdvisorPanel {
    advice: Option<String>,
    is_loading: bool,
    width: usize,
}

impl AdvisorPanel {
    pub fn new(width: usize) -> Self {
        Self {
            advice: None,
            is_loading: false,
            width: width.max(20),
        }
    }

    pub fn advice(&self) -> Option<&str> {
        self.advice.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Marks a request as in flight. Returns `false` (and changes nothing)
    /// if one already is.
    pub fn begin_request(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        true
    }

    /// Shows the result of the outstanding request. Failures are logged and
    /// replaced by the fallback text.
    pub fn finish_request(&mut self, result: Result<String, ServerError>) {
        self.is_loading = false;
        self.advice = Some(match result {
            Ok(advice) => advice,
            Err(e) => {
                warn!(error = %e, "financial advice request failed");
                ADVICE_FALLBACK.to_string()
            }
        });
    }

    /// Runs a whole request cycle. `on_loading` sees the panel once the
    /// request is in flight. Returns `false` if a request was already
    /// outstanding.
    pub async fn fetch<U>(
        &mut self,
        usecase: &U,
        debts: &[Debt],
        on_loading: impl FnOnce(&AdvisorPanel),
    ) -> bool
    where
        U: AdviceUsecase + ?Sized,
    {
        if !self.begin_request() {
            return false;
        }
        on_loading(self);
        let result = usecase.fetch_advice(debts).await;
        self.finish_request(result);
        true
    }

    pub fn render(&self) -> String {
        let mut output = String::from("Financial advisor\n\n");
        let text = self.advice.as_deref().unwrap_or(ADVISOR_GREETING);
        for line in textwrap::wrap(text, self.width) {
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
        output.push_str(if self.is_loading {
            LOADING_INDICATOR
        } else {
            ACTION_HINT
        });
        output.push('\n');
        output
    }
}
