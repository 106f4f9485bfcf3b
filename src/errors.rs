use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(WriteError, "Error writing file: '{path}'.", { path: &str });
define_client_error!(TerminalIoError, "Error talking to the terminal.");

// Parsing-related.
define_client_error!(
    InvalidStoredDebts,
    "Stored debts at '{path}' are not a valid record list. The file was left untouched.",
    { path: &str }
);
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    NegativeAmount,
    "Record '{id}' has a negative amount ({amount}).",
    { id: &str, amount: f64 }
);
define_client_error!(
    InvalidConfig,
    "Invalid config file '{path}' (invalid RON format).",
    { path: &str }
);
define_client_error!(InvalidCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });

// Advisor-related.
define_client_error!(
    AdviceNotConfigured,
    "No API key configured for the financial advisor. Set GEMINI_API_KEY or pass --api-key."
);
define_internal_error!(
    AdviceRequestFailed,
    "Advice request to model '{model}' failed.",
    { model: &str }
);
define_internal_error!(
    AdviceInvalidResponse,
    "Advice service returned an invalid response: {details}.",
    { details: &str }
);
