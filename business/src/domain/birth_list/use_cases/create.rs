use async_trait::async_trait;

use crate::domain::birth_list::errors::BirthListError;
use crate::domain::birth_list::model::{BirthList, NewBirthListProps};

pub struct CreateBirthListParams {
    pub props: NewBirthListProps,
}

#[async_trait]
pub trait CreateBirthListUseCase: Send + Sync {
    async fn execute(&self, params: CreateBirthListParams) -> Result<BirthList, BirthListError>;
}
