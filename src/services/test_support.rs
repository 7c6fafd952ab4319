//! Fixtures shared by the service tests.

use std::fmt::Debug;

use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::api::dto::{
    CreateCompanyRequest, CreateEmployeeRequest, CreateEpiRequest, CreateRoleRequest,
    CreateTerminationRequest,
};
use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Company, ContractType, Employee, Epi, RoleWithEpis};
use crate::repositories::{MemoryStore, Repositories};
use crate::services::Services;

pub const ACTOR_ID: i32 = 1;
pub const OTHER_ACTOR_ID: i32 = 2;
pub const TEST_JWT_SECRET: &str = "service-test-secret";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiration: 1,
        refresh_token_expiration: 24,
    }
}

pub fn company_payload(cnpj: &str) -> CreateCompanyRequest {
    CreateCompanyRequest {
        nome_fantasia: "Construtora Horizonte".to_string(),
        razao_social: "Horizonte Engenharia LTDA".to_string(),
        cnpj: cnpj.to_string(),
        rua: "Avenida Paulista".to_string(),
        numero: "1000".to_string(),
        complemento: Some("Sala 12".to_string()),
        bairro: "Bela Vista".to_string(),
        cidade: "São Paulo".to_string(),
        estado: "sp".to_string(),
        cep: "01310100".to_string(),
        data_fundacao: Some("2010-05-20".to_string()),
        email: Some("contato@horizonte.com.br".to_string()),
        celular: None,
    }
}

pub fn employee_payload(cpf: &str) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        nome: "João da Silva".to_string(),
        cpf: cpf.to_string(),
        data_nascimento: "1990-04-12".to_string(),
        data_admissao: "2024-01-08".to_string(),
        email: Some("joao@horizonte.com.br".to_string()),
        celular: None,
        regime_contratacao: Some(ContractType::Clt),
        salario: Some(BigDecimal::from(3500)),
        funcao_id: None,
        setor_id: None,
        rua: "Rua das Flores".to_string(),
        numero: "45".to_string(),
        complemento: None,
        bairro: "Centro".to_string(),
        cidade: "São Paulo".to_string(),
        estado: "SP".to_string(),
        cep: "01001000".to_string(),
    }
}

pub fn epi_payload(nome: &str) -> CreateEpiRequest {
    CreateEpiRequest {
        nome: nome.to_string(),
        descricao: Some(format!("{nome} de proteção")),
        certificado_aprovacao: Some("31469".to_string()),
    }
}

pub fn termination_payload() -> CreateTerminationRequest {
    CreateTerminationRequest {
        data: "2025-02-16".to_string(),
        motivo_interno: "Motivo teste".to_string(),
        motivo_trabalhista: Some("Dispensa sem justa causa".to_string()),
        acao_trabalhista: None,
        forma_demissao: "Aviso prévio indenizado".to_string(),
    }
}

/// Services over a fresh in-memory store.
pub struct Fixture {
    pub services: Services,
    /// The store behind `services`, for assertions below the service layer.
    pub store: MemoryStore,
}

impl Fixture {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let repos = Repositories::in_memory(store.clone());
        Self {
            services: Services::new(repos, test_jwt_config()),
            store,
        }
    }

    pub async fn company(&self) -> Company {
        self.company_with_cnpj("12345678000190").await
    }

    pub async fn company_with_cnpj(&self, cnpj: &str) -> Company {
        self.services
            .companies
            .create(company_payload(cnpj), ACTOR_ID)
            .await
            .unwrap()
    }

    pub async fn employee(&self, empresa_id: Uuid) -> Employee {
        self.services
            .employees
            .create(empresa_id, employee_payload("12345678901"), ACTOR_ID)
            .await
            .unwrap()
    }

    pub async fn epi(&self, empresa_id: Uuid, nome: &str) -> Epi {
        self.services
            .epis
            .create(empresa_id, epi_payload(nome), ACTOR_ID)
            .await
            .unwrap()
    }

    pub async fn role(&self, empresa_id: Uuid, epis: Vec<Uuid>) -> RoleWithEpis {
        self.services
            .roles
            .create(
                empresa_id,
                CreateRoleRequest {
                    nome: "Pedreiro".to_string(),
                    epis,
                },
                ACTOR_ID,
            )
            .await
            .unwrap()
    }
}

pub fn assert_not_found<T: Debug>(result: AppResult<T>, expected: &str) {
    match result {
        Err(AppError::NotFound { message }) => assert_eq!(message, expected),
        other => panic!("Expected NotFound({expected}), got: {:?}", other),
    }
}

pub fn assert_conflict<T: Debug>(result: AppResult<T>, expected: &str) {
    match result {
        Err(AppError::Conflict { message }) => assert_eq!(message, expected),
        other => panic!("Expected Conflict({expected}), got: {:?}", other),
    }
}
