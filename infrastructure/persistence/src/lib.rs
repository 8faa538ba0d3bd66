pub mod db;
pub mod birth_list {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod repository;
    pub mod storage;
}
pub mod invoice {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
