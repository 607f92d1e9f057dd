pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod tasks {
        pub mod core {
            pub mod ports;
            pub mod task;
        }
        pub mod use_cases {
            pub mod create_task {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod change_task_status {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_tasks {
                pub mod summary;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod tasks_in_memory;
            }
        }
    }

    pub mod time_entries {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod state;
        }
        pub mod application {
            pub mod errors;
            pub mod handler;
        }
        pub mod use_cases {
            pub mod start_timer {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod stop_timer {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod pause_timer {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_timer {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod switch_task {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod timer_status {
                pub mod status;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod timer_stats {
                pub mod stats;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_time_entry {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod edit_time_entry {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod validate_time_entry {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_entries_by_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod client;
pub mod shell;
