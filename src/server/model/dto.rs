//! Conversions from database models into API DTOs.

use crate::{
    model::{
        favorite::FavoriteDto,
        people::{PeopleDto, PersonDto},
        planet::{PlanetDto, PlanetsDto},
        user::UserDto,
    },
    server::model::db::{
        FavoriteModel, PeopleModel, PersonModel, PlanetModel, PlanetsModel, UserModel,
    },
};

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

impl From<PersonModel> for PersonDto {
    fn from(person: PersonModel) -> Self {
        Self {
            id: person.id,
            birth_year: person.birth_year,
            eye_color: person.eye_color,
            films: person.films.into(),
            gender: person.gender,
            hair_color: person.hair_color,
            height: person.height,
            homeworld: person.homeworld,
            mass: person.mass,
            name: person.name,
            skin_color: person.skin_color,
            created_at: person.created_at,
            edited_at: person.edited_at,
            species: person.species.into(),
            starships: person.starships.into(),
            url: person.url,
            vehicles: person.vehicles.into(),
        }
    }
}

impl From<PeopleModel> for PeopleDto {
    fn from(people: PeopleModel) -> Self {
        Self {
            id: people.id,
            name: people.name,
            url: people.url,
            person_id: people.person_id,
        }
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            climate: planet.climate,
            created_at: planet.created_at,
            edited_at: planet.edited_at,
            diameter: planet.diameter,
            films: planet.films.into(),
            gravity: planet.gravity,
            name: planet.name,
            orbital_period: planet.orbital_period,
            population: planet.population,
            residents: planet.residents.into(),
            rotation_period: planet.rotation_period,
            surface_water: planet.surface_water,
            terrain: planet.terrain,
            url: planet.url,
        }
    }
}

impl From<PlanetsModel> for PlanetsDto {
    fn from(planets: PlanetsModel) -> Self {
        Self {
            id: planets.id,
            name: planets.name,
            url: planets.url,
            planet_id: planets.planet_id,
        }
    }
}

impl From<FavoriteModel> for FavoriteDto {
    fn from(favorite: FavoriteModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            people_id: favorite.people_id,
        }
    }
}
