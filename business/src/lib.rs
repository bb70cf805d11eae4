pub mod application {
    pub mod auth {
        pub mod access_gate;
        pub mod login;
        pub mod register;
    }
    pub mod cart {
        pub mod add_item;
        pub mod get_cart;
        pub mod remove_item;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod identifier;
        pub mod pagination;
        pub mod value_objects;
    }
    pub mod auth {
        pub mod errors;
        pub mod gate;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod login;
            pub mod register;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod get_cart;
            pub mod remove_item;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
