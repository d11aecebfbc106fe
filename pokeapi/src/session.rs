use crate::page::{self, Page};
use crate::pokemon;
use crate::{Error, Pokemon, Species};

use bytes::Bytes;
use futures_util::future;
use reqwest::StatusCode;
use serde::Deserialize;

use std::sync::LazyLock;
use std::time::Duration;

const BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
}

impl Session {
    pub fn new() -> Self {
        Self {
            client: CLIENT.clone(),
        }
    }

    pub async fn fetch_page(&self, number: page::Number) -> Result<Page, Error> {
        #[derive(Deserialize)]
        struct Listing {
            count: usize,
            results: Vec<Entry>,
        }

        #[derive(Deserialize)]
        struct Entry {
            name: String,
        }

        let url = format!(
            "{BASE_URL}/pokemon?limit={limit}&offset={offset}",
            limit = page::SIZE,
            offset = number.offset(),
        );

        log::info!("Fetching page: {url}");

        let listing: Listing = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let pokemon = future::try_join_all(
            listing
                .results
                .iter()
                .map(|entry| self.fetch_pokemon(&entry.name)),
        )
        .await?;

        Ok(Page {
            total: listing.count,
            pokemon,
        })
    }

    pub async fn fetch_pokemon(&self, name_or_id: &str) -> Result<Pokemon, Error> {
        let url = format!("{BASE_URL}/pokemon/{name_or_id}");

        log::info!("Fetching pokemon: {url}");

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(name_or_id.to_owned()));
        }

        Ok(response.error_for_status()?.json().await?)
    }

    pub async fn fetch_species(&self, id: pokemon::Id) -> Result<Species, Error> {
        let url = format!("{BASE_URL}/pokemon-species/{id}");

        log::info!("Fetching species: {url}");

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(id.to_string()));
        }

        Ok(response.error_for_status()?.json().await?)
    }

    pub async fn download_image(&self, url: &str) -> Result<Bytes, Error> {
        log::info!("Downloading image: {url}");

        let response = self.client.get(url).send().await?;

        Ok(response.error_for_status()?.bytes().await?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(3))
        .build()
        .expect("Build reqwest client")
});
