/// Previously generated report files listed on the reports screen.
/// Static fixtures; the export/share actions around them are stubs.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFile {
    pub title: &'static str,
    pub period: &'static str,
    pub kind: &'static str,
    pub size: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyMetric {
    pub label: &'static str,
    pub value: &'static str,
}

pub fn seed_reports() -> Vec<ReportFile> {
    vec![
        ReportFile {
            title: "Relatório Mensal - Outubro",
            period: "01/10 - 31/10",
            kind: "Consolidado",
            size: "2.4 MB",
        },
        ReportFile {
            title: "Vistoria Semanal - Jardins",
            period: "23/10 - 29/10",
            kind: "Checklist",
            size: "1.1 MB",
        },
        ReportFile {
            title: "Não Conformidades Recorrentes",
            period: "Últimos 90 dias",
            kind: "Analytics",
            size: "850 KB",
        },
        ReportFile {
            title: "Auditoria de Manutenção",
            period: "Outubro/2023",
            kind: "Auditoria",
            size: "1.8 MB",
        },
    ]
}

pub fn monthly_metrics() -> Vec<MonthlyMetric> {
    vec![
        MonthlyMetric { label: "Vistorias Realizadas", value: "482" },
        MonthlyMetric { label: "Não Conformidades", value: "42" },
        MonthlyMetric { label: "Tempo Médio Reparo", value: "2.4 dias" },
        MonthlyMetric { label: "Eficiência da Limpeza", value: "94%" },
    ]
}

/// Case-insensitive title filter used by the history search field.
pub fn filter_reports<'a>(reports: &'a [ReportFile], term: &str) -> Vec<&'a ReportFile> {
    let needle = term.to_lowercase();
    reports
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_present() {
        assert_eq!(seed_reports().len(), 4);
        assert_eq!(monthly_metrics().len(), 4);
    }

    #[test]
    fn title_filter_is_case_insensitive() {
        let reports = seed_reports();
        let hits = filter_reports(&reports, "jardins");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, "Checklist");
        assert_eq!(filter_reports(&reports, "").len(), 4);
    }
}
