//! Built-in article catalog.
//!
//! Articles are compiled into the binary and never change at runtime. The
//! catalog order is the order of cards on the home page; the first article
//! is shown as the featured card.

use thiserror::Error;

use crate::content::{Block, render_blocks};

/// Errors from catalog lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Article not found: {0}")]
    NotFound(String),
}

/// Published blog article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    slug: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    category: &'static str,
    cover: &'static str,
    date: &'static str,
    read_time: &'static str,
}

impl Article {
    /// URL identifier, unique within the catalog.
    pub fn slug(&self) -> &str {
        self.slug
    }

    /// Article title.
    pub fn title(&self) -> &str {
        self.title
    }

    /// Short summary shown on cards and in the description meta tag.
    pub fn excerpt(&self) -> &str {
        self.excerpt
    }

    /// Raw content in the blog markup.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Category label.
    pub fn category(&self) -> &str {
        self.category
    }

    /// Cover symbol (a single emoji).
    pub fn cover(&self) -> &str {
        self.cover
    }

    /// Publish date as displayed.
    pub fn date(&self) -> &str {
        self.date
    }

    /// Reading time label as displayed.
    pub fn read_time(&self) -> &str {
        self.read_time
    }

    /// Renders the article content into display blocks.
    pub fn blocks(&self) -> Vec<Block> {
        render_blocks(self.content)
    }
}

static ARTICLES: &[Article] = &[
    Article {
        slug: "iskusstvo-medlennogo-utra",
        title: "Искусство медленного утра",
        excerpt: "Почему первые полчаса после пробуждения определяют весь день и как вернуть себе утро без спешки.",
        content: r#"
            Долгое время моё утро начиналось с телефона. Будильник, уведомления, новости,
            и вот я уже бегу, не успев *проснуться*.

            ## Что изменилось

            Однажды я решила не брать телефон в руки первые тридцать минут. Это оказалось
            **гораздо сложнее**, чем я думала.

            - Чашка воды до кофе
            - Десять минут у окна
            - Три строчки в дневнике
            - *Никаких* экранов

            Через месяц я заметила, что день перестал ускользать.

            ## Вместо вывода

            Медленное утро не про дисциплину. Оно про *разрешение* себе не торопиться.
        "#,
        category: "Образ жизни",
        cover: "☕",
        date: "12 марта 2024",
        read_time: "5 мин чтения",
    },
    Article {
        slug: "tetrad-dlya-nichego",
        title: "Тетрадь для ничего",
        excerpt: "О блокноте, в который можно писать что угодно, и о том, почему бесполезное иногда важнее полезного.",
        content: r#"
            У меня есть тетрадь, в которой нет никакой системы. Туда попадают списки,
            обрывки фраз, рисунки на полях.

            ## Зачем она нужна

            Творчество редко приходит по расписанию. Оно любит *беспорядок* и
            **отсутствие ожиданий**.

            - Записывать, не перечитывая
            - Не вырывать страницы
            - Заканчивать тетрадь до конца

            Иногда через год я открываю старую тетрадь и нахожу там идею, которая
            наконец-то созрела.
        "#,
        category: "Творчество",
        cover: "📓",
        date: "28 февраля 2024",
        read_time: "4 мин чтения",
    },
    Article {
        slug: "progulka-bez-celi",
        title: "Прогулка без цели",
        excerpt: "Что происходит, когда выходишь из дома, не зная, куда идёшь.",
        content: r#"
            Мы привыкли ходить *куда-то*. В магазин, на работу, к метро. Прогулка
            без цели кажется почти неприличной роскошью.

            ## Правила, которых нет

            - Сворачивать туда, где интереснее
            - Останавливаться без причины
            - Возвращаться другой дорогой

            Город, который я знала десять лет, вдруг оказался **совсем незнакомым**.
        "#,
        category: "Размышления",
        cover: "🍂",
        date: "15 февраля 2024",
        read_time: "3 мин чтения",
    },
    Article {
        slug: "tishina-kak-navyk",
        title: "Тишина как навык",
        excerpt: "Умение побыть в тишине оказалось не врождённым качеством, а навыком, который можно тренировать.",
        content: r#"
            Раньше тишина меня пугала. Я включала подкаст, даже когда мыла посуду.

            ## Маленькие шаги

            Начать можно с пяти минут. Просто сидеть и *слушать*, что происходит вокруг:
            холодильник, птицы, собственное дыхание.

            Постепенно тишина перестаёт быть пустотой и становится **пространством**.
        "#,
        category: "Размышления",
        cover: "🌿",
        date: "2 февраля 2024",
        read_time: "4 мин чтения",
    },
];

/// Returns all articles in display order.
pub fn articles() -> &'static [Article] {
    ARTICLES
}

/// Looks up an article by slug.
///
/// # Errors
///
/// Returns `CatalogError::NotFound` if no article has the given slug.
pub fn find(slug: &str) -> Result<&'static Article, CatalogError> {
    ARTICLES
        .iter()
        .find(|article| article.slug == slug)
        .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
}
