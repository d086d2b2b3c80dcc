pub mod application {
    pub mod guild_job {
        pub mod export;
    }
}

pub mod domain {
    pub mod logger;
    pub mod export_config {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
    pub mod guild_job {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod export;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
