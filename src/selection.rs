use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::City;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<City>", into = "Vec<City>")]
pub struct Selection {
    cities: Vec<City>,
}

impl From<Vec<City>> for Selection {
    fn from(cities: Vec<City>) -> Self {
        let mut selection = Selection::default();
        for city in cities {
            selection.push_unique(city);
        }
        selection
    }
}

impl From<Selection> for Vec<City> {
    fn from(selection: Selection) -> Self {
        selection.cities
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn reference(&self) -> Option<&City> {
        self.cities.first()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn contains(&self, city: &City) -> bool {
        self.cities.iter().any(|c| c.same_entry(city))
    }

    fn push_unique(&mut self, city: City) -> bool {
        if self.contains(&city) {
            return false;
        }
        self.cities.push(city);
        true
    }

    pub fn add(&mut self, city: City) -> bool {
        let name = city.name.clone();
        let added = self.push_unique(city);
        if added {
            info!(city = %name, count = self.cities.len(), "city added");
        }
        added
    }

    pub fn remove(&mut self, index: usize) -> Result<City> {
        self.check_index(index)?;
        let city = self.cities.remove(index);
        info!(city = %city.name, count = self.cities.len(), "city removed");
        Ok(city)
    }

    pub fn set_reference(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let city = self.cities.remove(index);
        info!(city = %city.name, "reference city changed");
        self.cities.insert(0, city);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.cities.len() {
            Ok(())
        } else {
            Err(Error::CityIndexOutOfRange {
                index,
                len: self.cities.len(),
            })
        }
    }
}
