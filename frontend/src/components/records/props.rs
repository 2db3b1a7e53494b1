use common::config::ClientConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ListPageProps {
    pub config: ClientConfig,
}
