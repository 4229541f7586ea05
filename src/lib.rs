pub mod configuration;

pub mod math {
    pub mod integration {
        pub mod integrationerror;
        pub mod integrator;
        pub mod partition;
        pub mod sequentialtrapezoid;
        pub mod concurrenttrapezoid;
    }
}
