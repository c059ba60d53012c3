//! Route table mapping logical operation names to backend paths.
//!
//! Every entry is either a fixed path or a template taking a single identifier. The table
//! is part of the wire contract with the backend and carries no state.

use std::fmt;

use crate::http::request::Method;

/// Identifier substituted into a templated route, kept in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteParam(String);

impl RouteParam {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! route_param_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for RouteParam {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )+
    };
}

route_param_from!(i32, i64, u32, u64, usize, &str, String, &String);

/// How an endpoint's path is produced.
#[derive(Clone, Copy)]
pub enum RouteDescriptor {
    /// Fixed path, identical for every call.
    Literal(&'static str),
    /// Path built from a single identifier.
    Templated(fn(&RouteParam) -> String),
}

impl RouteDescriptor {
    /// Produce the path for this route.
    ///
    /// Literal routes ignore `param`. Templated routes substitute the identifier verbatim,
    /// without any percent-encoding.
    ///
    /// # Panics
    /// Panics when a templated route is resolved without an identifier; callers must always
    /// supply one for parameterized endpoints.
    pub fn resolve(&self, param: Option<&RouteParam>) -> String {
        match self {
            Self::Literal(path) => (*path).to_string(),
            Self::Templated(template) => match param {
                Some(param) => template(param),
                None => panic!("templated route resolved without an identifier"),
            },
        }
    }

    pub fn is_templated(&self) -> bool {
        matches!(self, Self::Templated(_))
    }
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(path) => f.debug_tuple("Literal").field(path).finish(),
            Self::Templated(_) => f.debug_tuple("Templated").finish(),
        }
    }
}

macro_rules! endpoints {
    ($($variant:ident => $name:literal, $method:ident, $descriptor:expr;)+) => {
        /// Logical backend operation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Endpoint {
            $($variant,)+
        }

        impl Endpoint {
            #[cfg(test)]
            pub const ALL: &'static [Endpoint] = &[$(Endpoint::$variant,)+];

            /// Name of the operation as used by the page scripts (`getTransportadora`).
            pub fn name(self) -> &'static str {
                match self {
                    $(Endpoint::$variant => $name,)+
                }
            }

            /// HTTP method the backend serves this operation with.
            pub fn method(self) -> Method {
                match self {
                    $(Endpoint::$variant => Method::$method,)+
                }
            }

            pub fn descriptor(self) -> RouteDescriptor {
                match self {
                    $(Endpoint::$variant => $descriptor,)+
                }
            }
        }
    };
}

use RouteDescriptor::{Literal, Templated};

endpoints! {
    Login => "login", Post, Literal("/login");
    Logout => "logout", Post, Literal("/logout");
    GetPerfil => "getPerfil", Get, Literal("/api/perfil");
    UpdatePerfil => "updatePerfil", Put, Literal("/api/perfil");

    GetTransportadoras => "getTransportadoras", Get, Literal("/api/transportadoras");
    CreateTransportadora => "createTransportadora", Post, Literal("/api/transportadoras");
    GetTransportadora => "getTransportadora", Get, Templated(|id| format!("/api/transportadoras/{id}"));
    UpdateTransportadora => "updateTransportadora", Put, Templated(|id| format!("/api/transportadoras/{id}"));
    DeleteTransportadora => "deleteTransportadora", Delete, Templated(|id| format!("/api/transportadoras/{id}"));

    GetPracas => "getPracas", Get, Literal("/api/pracas");
    CreatePraca => "createPraca", Post, Literal("/api/pracas");
    GetPraca => "getPraca", Get, Templated(|id| format!("/api/pracas/{id}"));
    UpdatePraca => "updatePraca", Put, Templated(|id| format!("/api/pracas/{id}"));
    DeletePraca => "deletePraca", Delete, Templated(|id| format!("/api/pracas/{id}"));

    GetTabelasPreco => "getTabelasPreco", Get, Literal("/api/tpracas");
    CreateTabelaPreco => "createTabelaPreco", Post, Literal("/api/tpracas");
    GetTabelaPreco => "getTabelaPreco", Get, Templated(|id| format!("/api/tpracas/{id}"));
    UpdateTabelaPreco => "updateTabelaPreco", Put, Templated(|id| format!("/api/tpracas/{id}"));
    DeleteTabelaPreco => "deleteTabelaPreco", Delete, Templated(|id| format!("/api/tpracas/{id}"));

    GetTaxaTipos => "getTaxaTipos", Get, Literal("/api/taxa_tipos");
    GetTaxaTransportes => "getTaxaTransportes", Get, Literal("/api/taxa_transportes");

    GetUsuarios => "getUsuarios", Get, Literal("/api/usuarios");
    CreateUsuario => "createUsuario", Post, Literal("/api/usuarios");
    GetUsuario => "getUsuario", Get, Templated(|id| format!("/api/usuarios/{id}"));
    UpdateUsuario => "updateUsuario", Put, Templated(|id| format!("/api/usuarios/{id}"));
    DeleteUsuario => "deleteUsuario", Delete, Templated(|id| format!("/api/usuarios/{id}"));

    GetMunicipios => "getMunicipios", Get, Literal("/api/municipios");
    GetMunicipio => "getMunicipio", Get, Templated(|ibge| format!("/api/municipios/{ibge}"));
    GetEstados => "getEstados", Get, Literal("/api/estados");
    GetEstado => "getEstado", Get, Templated(|uf| format!("/api/estados/{uf}"));

    CalcularFrete => "calcularFrete", Post, Literal("/api/calculo-frete");
}

impl Endpoint {
    /// Resolve the endpoint's path, see [`RouteDescriptor::resolve`].
    pub fn resolve(self, param: Option<&RouteParam>) -> String {
        self.descriptor().resolve(param)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
