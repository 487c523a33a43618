pub mod application {
    pub mod basket {
        pub mod store;
    }
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
    }
    pub mod user {
        pub mod get_profile;
        pub mod login;
        pub mod logout;
        pub mod register;
        pub mod update_profile;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod basket {
        pub mod errors;
        pub mod model;
        pub mod service;
        pub mod state;
    }
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod service;
        pub mod session;
        pub mod use_cases {
            pub mod get_profile;
            pub mod login;
            pub mod logout;
            pub mod register;
            pub mod update_profile;
        }
    }
}
