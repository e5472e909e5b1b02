pub mod application {
    pub mod product {
        pub mod create;
        pub mod load_catalog;
    }
    pub mod storefront {
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod model;
    }
    pub mod catalog {
        pub mod filter;
        pub mod pagination;
        pub mod view;
    }
    pub mod product {
        pub mod errors;
        pub mod form;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod create;
            pub mod load_catalog;
        }
    }
    pub mod storefront {
        pub mod dialog;
        pub mod model;
    }
}
