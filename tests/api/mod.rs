mod auth;
mod localidades;
mod transportadoras;
mod usuarios;
