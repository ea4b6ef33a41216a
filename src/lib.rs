// Crate entry point. Declares and exposes modules so the binary and the tests can reach them.
//
// Layout
// - shared: cross-cutting building blocks (renderers, auth, templates, upstream port, errors).
// - modules: one folder per tour area, each with its axum handlers under `inbound`.
// - shell: composition root (config, state, router, logging, server lifecycle).

pub mod shared {
    pub mod core {
        pub mod errors;
    }
    pub mod auth {
        pub mod basic_auth;
    }
    pub mod render;
    pub mod templates;
    pub mod upstream;
}

pub mod modules {
    pub mod rendering {
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod forms {
        pub mod person;
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod uploads {
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod streaming {
        pub mod request_snapshot;
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod redirects {
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod admin {
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod methods {
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
