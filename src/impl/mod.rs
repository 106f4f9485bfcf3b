// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod debts_json_datasource;
        pub(crate) mod gemini_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod debt_model;
        pub(crate) mod generate_content_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod advice_repository_impl;
        pub(crate) mod debts_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod active_tab;
        pub(crate) mod dashboard_stats;
        pub(crate) mod debt;
        pub(crate) mod debt_form;
    }
    pub(crate) mod logic {
        pub(crate) mod derivations;
        pub(crate) mod form_processor;
    }
    pub(crate) mod repositories {
        pub(crate) mod advice_repository;
        pub(crate) mod debts_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod advice_usecase;
        pub(crate) mod debt_store;
    }
}

pub(crate) mod presentation {
    pub(crate) mod advisor_panel;
    pub(crate) mod confirmation;
    pub(crate) mod debt_fmt;
    pub(crate) mod debt_list_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::active_tab::*;
        pub use crate::domain::entities::dashboard_stats::*;
        pub use crate::domain::entities::debt::*;
        pub use crate::domain::entities::debt_form::*;
    }

    pub mod derivations {
        pub use crate::domain::logic::derivations::*;
    }

    pub mod repositories {
        pub use crate::domain::repositories::advice_repository::*;
        pub use crate::domain::repositories::debts_repository::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::advice_usecase::AdviceUsecase;
        pub use crate::domain::usecases::debt_store::*;
    }

    pub mod ui {
        pub use crate::presentation::advisor_panel::*;
        pub use crate::presentation::confirmation::{
            AssumeYes, Confirmation, TerminalConfirmation,
        };
        pub use crate::presentation::debt_list_printer::*;
    }
}
