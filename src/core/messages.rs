use crate::core::{Locale, OutcomeStatus};

/// User-facing texts for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn default_title(&self) -> &'static str {
        match self.locale {
            Locale::En => "Drug Interaction Checker — free demo version",
            Locale::PtBr => {
                "Sistema de Consulta de Interações Medicamentosas — versão gratuita de demonstração"
            }
        }
    }

    pub fn missing_input(&self) -> &'static str {
        match self.locale {
            Locale::En => "Please enter two drug names.",
            Locale::PtBr => "Por favor, informe dois medicamentos.",
        }
    }

    pub fn not_found(&self, missing: &[&str]) -> String {
        let names = missing.join(", ");
        match self.locale {
            Locale::En => format!(
                "Could not find an RxCUI for: {}. Try variations of the name (e.g. the generic name).",
                names
            ),
            Locale::PtBr => format!(
                "Não foi possível encontrar RxCUI para: {}. Tente variações do nome (ex.: nome genérico).",
                names
            ),
        }
    }

    pub fn service_error(&self) -> &'static str {
        match self.locale {
            Locale::En => "Error querying the external API. Please try again later.",
            Locale::PtBr => "Erro ao consultar a API externa. Tente novamente mais tarde.",
        }
    }

    pub fn no_interaction(&self) -> &'static str {
        match self.locale {
            Locale::En => "No known interaction was found between the given drugs.",
            Locale::PtBr => {
                "Nenhuma interação conhecida encontrada entre os medicamentos informados."
            }
        }
    }

    pub fn interaction(&self) -> &'static str {
        match self.locale {
            Locale::En => "Known interaction found.",
            Locale::PtBr => "Interação conhecida encontrada.",
        }
    }

    /// Heading shown above the message on the result page.
    pub fn status_heading(&self, status: OutcomeStatus) -> &'static str {
        match (self.locale, status) {
            (Locale::En, OutcomeStatus::Error) => "Error",
            (Locale::En, OutcomeStatus::NotFound) => "Drug not found",
            (Locale::En, OutcomeStatus::NoInteraction) => "No interaction",
            (Locale::En, OutcomeStatus::Interaction) => "Interaction",
            (Locale::PtBr, OutcomeStatus::Error) => "Erro",
            (Locale::PtBr, OutcomeStatus::NotFound) => "Medicamento não encontrado",
            (Locale::PtBr, OutcomeStatus::NoInteraction) => "Sem interação",
            (Locale::PtBr, OutcomeStatus::Interaction) => "Interação",
        }
    }

    pub fn form_labels(&self) -> FormLabels {
        match self.locale {
            Locale::En => FormLabels {
                drug_a: "First drug",
                drug_b: "Second drug",
                submit: "Check interaction",
                severity: "Severity",
                details: "Details",
                back: "New check",
                disclaimer: "For information only. This is not medical advice.",
            },
            Locale::PtBr => FormLabels {
                drug_a: "Primeiro medicamento",
                drug_b: "Segundo medicamento",
                submit: "Verificar interação",
                severity: "Gravidade",
                details: "Detalhes",
                back: "Nova consulta",
                disclaimer: "Apenas informativo. Não substitui orientação médica.",
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormLabels {
    pub drug_a: &'static str,
    pub drug_b: &'static str,
    pub submit: &'static str,
    pub severity: &'static str,
    pub details: &'static str,
    pub back: &'static str,
    pub disclaimer: &'static str,
}
