//! JSON bodies as the backend returns them.

use serde_json::{json, Value};

use crate::constant::TEST_CSRF_TOKEN;

pub fn mock_user(id: i64, username: &str, role: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "role": role,
    })
}

/// Successful login response issuing [`TEST_CSRF_TOKEN`].
pub fn mock_login_success(user: Value) -> Value {
    json!({
        "success": true,
        "user": user,
        "csrf_token": TEST_CSRF_TOKEN,
    })
}

pub fn mock_login_failure() -> Value {
    json!({
        "success": false,
        "message": "Credenciais inválidas",
    })
}

pub fn mock_transportadora(id: i64, nome_fantasia: &str) -> Value {
    json!({
        "ID": id,
        "DESCRICAO": format!("{} LTDA", nome_fantasia),
        "NOME_FAN": nome_fantasia,
        "CNPJ": "12345678000199",
        "ATIVO": 1,
    })
}

pub fn mock_mutation_result(id: Option<i64>) -> Value {
    match id {
        Some(id) => json!({"success": true, "id": id}),
        None => json!({"success": true}),
    }
}

/// Freight quote with two price tables; amounts mix numbers and strings as the backend does.
pub fn mock_calculo_frete() -> Value {
    json!({
        "destino": {"cep": "13010000", "municipio": "Campinas", "uf": "SP"},
        "resultados": [
            {
                "id_tabela": 1,
                "praca_nome": "Interior SP",
                "modal": "rodoviario",
                "prazo_entrega": 3,
                "valor_frete": 120.5,
                "tipo_calculo": "peso",
                "valor_utilizado": "15.00",
                "taxas": [{
                    "id": 2, "descricao": "GRIS", "sigla": "GRIS", "tipo": "AD",
                    "valor": "3.50", "obrigatoria": true
                }],
                "valor_total": "124.00"
            },
            {
                "id_tabela": 7,
                "praca_nome": "Campinas Expresso",
                "modal": null,
                "prazo_entrega": 5,
                "valor_frete": "99.90",
                "tipo_calculo": "cubagem",
                "valor_utilizado": 1.2,
                "taxas": [],
                "valor_total": 99.9
            }
        ]
    })
}

/// Zone row; `municipios` is only sent by the detail endpoint.
pub fn mock_praca(id: i64, nome: &str, municipios: Vec<Value>) -> Value {
    json!({
        "id": id,
        "nome": nome,
        "id_transportadora": 1,
        "municipios": municipios,
        "ativo": true,
    })
}

pub fn mock_praca_municipio(id: i64, cod_municipio: i64, municipio: &str, uf: &str) -> Value {
    json!({
        "id": id,
        "CodMunicipio": cod_municipio,
        "municipio": municipio,
        "Uf": uf,
    })
}

pub fn mock_tabela_preco(id: i64, id_praca: i64) -> Value {
    json!({
        "id": id,
        "id_praca": id_praca,
        "praca_nome": "Interior SP",
        "modal": "rodoviario",
        "tipo_cobranca_peso": "peso",
        "prazo_entrega": 3,
        "faixas": [{"tipo": "peso", "faixa_min": "0.00", "faixa_max": "10.00", "valor": "45.00"}],
        "taxas": [],
        "observacoes": null,
    })
}

pub fn mock_taxa(id: i64, sigla: &str) -> Value {
    json!({
        "id": id,
        "sigla": sigla,
        "descricao": format!("Taxa {}", sigla),
        "aplicacao": "frete",
    })
}

pub fn mock_municipio(codigo_ibge: i64, municipio: &str, uf: &str) -> Value {
    json!({
        "codigoIbge": codigo_ibge,
        "municipio": municipio,
        "Uf": uf,
        "CodigoUf": 35,
        "estado": "São Paulo",
    })
}

pub fn mock_estado(uf: &str, nome: &str) -> Value {
    json!({
        "CodigoUf": 35,
        "Uf": uf,
        "Nome": nome,
        "Regiao": "Sudeste",
    })
}
