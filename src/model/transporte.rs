use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Carrier row of `transporte.transportadoras`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transportadora {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "DESCRICAO", default)]
    pub descricao: Option<String>,
    #[serde(rename = "NOME_FAN", default)]
    pub nome_fantasia: Option<String>,
    #[serde(rename = "CNPJ", default)]
    pub cnpj: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /api/transportadoras` and `PUT /api/transportadoras/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransportadoraPayload {
    #[serde(rename = "COD_FOR")]
    pub cod_for: Option<String>,
    #[serde(rename = "DESCRICAO")]
    pub descricao: String,
    #[serde(rename = "NOME_FAN")]
    pub nome_fantasia: Option<String>,
    #[serde(rename = "CNPJ")]
    pub cnpj: Option<String>,
    #[serde(rename = "INSC_EST")]
    pub inscricao_estadual: Option<String>,
    #[serde(rename = "INSC_MUN")]
    pub inscricao_municipal: Option<String>,
    #[serde(rename = "SISTEMA")]
    pub sistema: Option<String>,
    pub tipo_unidade: Option<String>,
    pub id_matriz: Option<i64>,
}

/// Municipality served by a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracaMunicipio {
    pub id: i64,
    #[serde(rename = "CodMunicipio")]
    pub cod_municipio: i64,
    pub municipio: String,
    #[serde(rename = "Uf")]
    pub uf: String,
}

/// Delivery zone ("praça").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Praca {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub id_transportadora: Option<i64>,
    /// Only filled by `GET /api/pracas/{id}`.
    #[serde(default)]
    pub municipios: Vec<PracaMunicipio>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PracaPayload {
    pub nome: String,
    pub id_transportadora: Option<i64>,
    /// IBGE codes of the municipalities served.
    pub municipios: Vec<i64>,
}

/// Price table ("tabela de preço") of a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabelaPreco {
    pub id: i64,
    pub id_praca: i64,
    #[serde(default)]
    pub praca_nome: Option<String>,
    #[serde(default)]
    pub modal: Option<String>,
    #[serde(default)]
    pub tipo_cobranca_peso: Option<String>,
    #[serde(default)]
    pub prazo_entrega: Option<i64>,
    /// Weight/cubage brackets, only filled by `GET /api/tpracas/{id}`.
    #[serde(default)]
    pub faixas: Vec<Value>,
    /// Fees attached to the table, only filled by `GET /api/tpracas/{id}`.
    #[serde(default)]
    pub taxas: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// How a price table charges a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoCobranca {
    Peso,
    Cubagem,
    Ambos,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaixaPayload {
    /// Either `peso` or `cubagem`.
    pub tipo: String,
    pub faixa_min: f64,
    pub faixa_max: Option<f64>,
    pub valor: f64,
    pub adicional_por_excedente: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxaTabelaPayload {
    pub id_taxa_tipo: i64,
    pub id_transportadora: Option<i64>,
    pub id_taxa: i64,
    pub valor: f64,
    /// `%` for a share of the freight value, `R$` for a fixed amount.
    pub unidade: String,
    pub obrigatoria: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabelaPrecoPayload {
    pub id_praca: i64,
    pub modal: Option<String>,
    pub tipo_cobranca_peso: TipoCobranca,
    pub observacoes: Option<String>,
    pub prazo_entrega: Option<i64>,
    pub entrega_tipo: Option<String>,
    pub faixas: Vec<FaixaPayload>,
    pub taxas: Vec<TaxaTabelaPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxaTipo {
    pub id: i64,
    pub sigla: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub aplicacao: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxaTransporte {
    pub id: i64,
    pub sigla: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub aplicacao: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
