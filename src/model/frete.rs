use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, model::api::de_amount};

/// Body of `POST /api/calculo-frete`.
#[derive(Debug, Clone, Serialize)]
pub struct CalculoFreteRequest {
    pub cep_destino: String,
    pub peso: f64,
    pub cubagem: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_mercadoria: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportadora_id: Option<i64>,
}

impl CalculoFreteRequest {
    /// Reject requests the backend would refuse: a destination CEP and a positive weight
    /// or cubage are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let cep: String = self
            .cep_destino
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if cep.is_empty() || (self.peso <= 0.0 && self.cubagem <= 0.0) {
            return Err(ValidationError::MissingFreightInput);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Destino {
    pub cep: String,
    pub municipio: String,
    pub uf: String,
}

/// Fee applied to a quote.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxaCalculada {
    pub id: i64,
    #[serde(default)]
    pub descricao: Option<String>,
    pub sigla: String,
    pub tipo: String,
    #[serde(deserialize_with = "de_amount")]
    pub valor: f64,
    pub obrigatoria: bool,
}

/// Quote from one price table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultadoFrete {
    pub id_tabela: i64,
    pub praca_nome: String,
    #[serde(default)]
    pub modal: Option<String>,
    #[serde(default)]
    pub prazo_entrega: Option<i64>,
    #[serde(deserialize_with = "de_amount")]
    pub valor_frete: f64,
    pub tipo_calculo: String,
    #[serde(deserialize_with = "de_amount")]
    pub valor_utilizado: f64,
    #[serde(default)]
    pub taxas: Vec<TaxaCalculada>,
    /// Freight value plus mandatory fees.
    #[serde(deserialize_with = "de_amount")]
    pub valor_total: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculoFreteResponse {
    pub destino: Destino,
    pub resultados: Vec<ResultadoFrete>,
}

impl CalculoFreteResponse {
    /// Cheapest quote by total value.
    pub fn melhor_opcao(&self) -> Option<&ResultadoFrete> {
        self.resultados
            .iter()
            .min_by(|a, b| a.valor_total.total_cmp(&b.valor_total))
    }
}
