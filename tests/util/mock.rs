use holonet::model::{people::CreatePersonDto, planet::CreatePlanetDto};

pub fn mock_create_person_dto(name: &str, url: &str) -> CreatePersonDto {
    CreatePersonDto {
        birth_year: "19BBY".to_string(),
        eye_color: "blue".to_string(),
        films: vec!["https://swapi.dev/api/films/1/".to_string()],
        gender: "male".to_string(),
        hair_color: "blond".to_string(),
        height: "172".to_string(),
        homeworld: "https://swapi.dev/api/planets/1/".to_string(),
        mass: "77".to_string(),
        name: name.to_string(),
        skin_color: "fair".to_string(),
        species: Vec::new(),
        starships: Vec::new(),
        url: url.to_string(),
        vehicles: Vec::new(),
    }
}

pub fn mock_create_planet_dto(name: &str, url: &str) -> CreatePlanetDto {
    CreatePlanetDto {
        climate: "frozen".to_string(),
        diameter: "7200".to_string(),
        films: vec!["https://swapi.dev/api/films/2/".to_string()],
        gravity: "1.1 standard".to_string(),
        name: name.to_string(),
        orbital_period: "549".to_string(),
        population: "unknown".to_string(),
        residents: Vec::new(),
        rotation_period: "23".to_string(),
        surface_water: "100".to_string(),
        terrain: "tundra, ice caves, mountain ranges".to_string(),
        url: url.to_string(),
    }
}
