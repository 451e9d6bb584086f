pub mod modules {
    pub mod accounts {
        pub mod core {
            pub mod account;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod register_user {
                pub mod command;
                pub mod handler;
                pub mod outcome;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod account_store_in_memory;
                pub mod argon2_hasher;
            }
        }
    }
}

pub mod shell;
