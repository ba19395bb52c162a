pub mod shared {
    pub mod infrastructure {
        pub mod entry_store;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod aggregation;
            pub mod entry;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod report_monthly_hours {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod report_weekly_hours {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
