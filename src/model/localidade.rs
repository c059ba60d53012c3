use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipio {
    #[serde(rename = "codigoIbge")]
    pub codigo_ibge: i64,
    pub municipio: String,
    #[serde(rename = "Uf")]
    pub uf: String,
    #[serde(rename = "CodigoUf")]
    pub codigo_uf: i64,
    pub estado: String,
    /// CEP ranges of the municipality, only filled by `GET /api/municipios/{ibge}`.
    #[serde(default)]
    pub faixas_cep: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estado {
    #[serde(rename = "CodigoUf")]
    pub codigo_uf: i64,
    #[serde(rename = "Uf")]
    pub uf: String,
    #[serde(rename = "Nome")]
    pub nome: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
