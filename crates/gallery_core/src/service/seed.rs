//! First-run seed data.

use crate::model::project::Project;

/// Builds the three sample projects shown when no list is persisted.
///
/// Timestamps step back one second per entry so the list reads newest-first.
pub fn seed_projects(now_epoch_ms: i64) -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Gerador de Poemas Épicos".to_string(),
            description: "Uma aplicação que utiliza a API Gemini Pro para criar poemas no estilo camoniano sobre temas modernos.".to_string(),
            url: "https://aistudio.google.com/".to_string(),
            image_url: Some("https://picsum.photos/id/1/800/600".to_string()),
            tags: vec![
                "Gemini Pro".to_string(),
                "Criativo".to_string(),
                "Literatura".to_string(),
            ],
            created_at: now_epoch_ms,
        },
        Project {
            id: "2".to_string(),
            title: "Analisador de Sentimentos".to_string(),
            description: "Dashboard analítico que processa comentários de clientes e classifica sentimentos em tempo real.".to_string(),
            url: "https://github.com/".to_string(),
            image_url: Some("https://picsum.photos/id/20/800/600".to_string()),
            tags: vec![
                "NLP".to_string(),
                "Analytics".to_string(),
                "Business".to_string(),
            ],
            created_at: now_epoch_ms - 1000,
        },
        Project {
            id: "3".to_string(),
            title: "Assistente de Código React".to_string(),
            description: "Ferramenta para ajudar desenvolvedores a refatorar componentes React legado para Hooks modernos.".to_string(),
            url: "https://google.com".to_string(),
            image_url: Some("https://picsum.photos/id/60/800/600".to_string()),
            tags: vec!["DevTools".to_string(), "Produtividade".to_string()],
            created_at: now_epoch_ms - 2000,
        },
    ]
}
