pub mod application {
    pub mod birth_list {
        pub mod add_item;
        pub mod cancel_reservation;
        pub mod create;
        pub mod delete_item;
        pub mod get_all;
        pub mod get_by_id;
        pub mod purchase_item;
        pub mod reserve_item;
        pub mod update_items;
    }
    pub mod cart {
        pub mod add_item;
        pub mod load;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod invoice {
        pub mod delete;
        pub mod get_pdf;
    }
    pub mod order {
        pub mod checkout;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update_status;
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
        pub mod value_objects;
    }
    pub mod birth_list {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod cancel_reservation;
            pub mod create;
            pub mod delete_item;
            pub mod get_all;
            pub mod get_by_id;
            pub mod purchase_item;
            pub mod reserve_item;
            pub mod update_items;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod storage;
        pub mod use_cases {
            pub mod add_item;
            pub mod load;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod invoice {
        pub mod archive;
        pub mod errors;
        pub mod model;
        pub mod renderer;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod delete;
            pub mod get_pdf;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod checkout;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
