pub mod application {
    pub mod account {
        pub mod service;
    }
    pub mod auth {
        pub mod service;
    }
    pub mod goal {
        pub mod service;
    }
    pub mod tag {
        pub mod service;
    }
    pub mod transaction {
        pub mod service;
    }
    pub mod user {
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod repository;
    pub mod account {
        pub mod errors;
        pub mod model;
        pub mod service;
        pub mod value_objects;
    }
    pub mod auth {
        pub mod errors;
        pub mod service;
    }
    pub mod goal {
        pub mod errors;
        pub mod model;
        pub mod service;
    }
    pub mod tag {
        pub mod errors;
        pub mod model;
        pub mod service;
    }
    pub mod transaction {
        pub mod errors;
        pub mod model;
        pub mod service;
        pub mod value_objects;
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod password;
        pub mod service;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
