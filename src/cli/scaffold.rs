// ABOUTME: Starter files written by `paperfill init`
// ABOUTME: An IMRaD + PRISMA manuscript template and a matching paper.yaml skeleton

/// Manuscript template with one placeholder per document section
pub const DEFAULT_TEMPLATE: &str = r#"# {{TITLE}}

*{{SUBTITLE}}*

**Ngày:** {{DATE}}

## Tác giả
{{AUTHORS}}

## Tóm tắt
{{ABSTRACT}}

**Từ khóa:** {{KEYWORDS}}

## 1. Giới thiệu
{{INTRO}}

## 2. Phương pháp (PRISMA / Systematic Review)
{{METHODS}}

### 2.1 Sơ đồ PRISMA (mô tả)
{{PRISMA}}

## 3. Kết quả
{{RESULTS}}

## 4. Thảo luận
{{DISCUSSION}}

## 5. Kết luận
{{CONCLUSION}}

### Hạn chế
{{LIMITATIONS}}

## Lời cảm ơn
{{ACK}}

## Công bố dữ liệu / Mã nguồn
{{DATA_AVAIL}}

## Đạo đức
{{ETHICS}}

## Tài trợ
{{FUNDING}}

## Xung đột lợi ích
{{CONFLICTS}}

## Tài liệu tham khảo
{{REFERENCES}}
"#;

/// Skeleton manuscript data covering every field the template uses
pub const SAMPLE_PAPER: &str = r#"# Manuscript data for paperfill. Every field is optional.
meta:
  title: "Tiêu đề bài báo"
  subtitle: "Một tổng quan hệ thống theo PRISMA"
  # date: 2025-01-31   # defaults to today
  authors:
    - name: "Tác giả thứ nhất"
      affiliation: "Đơn vị công tác"
      email: "author@example.edu"
      orcid: "0000-0000-0000-0000"

abstract:
  text: "Tóm tắt 220-280 từ."
  keywords: [từ khóa 1, từ khóa 2, PRISMA]

sections:
  introduction: ""
  methods: ""
  prisma: ""
  results: ""
  discussion: ""
  conclusion: ""
  limitations: ""

acknowledgments: ""
data_availability: ""
ethics: ""
funding: ""
conflicts_of_interest: "Các tác giả tuyên bố không có xung đột lợi ích."

references:
  - type: journal_article
    title: "Title of the article"
    container: "Journal Name"
    date: 2024-01-01
    authors:
      - { family: "Nguyen", given: "A." }
    volume: 1
    issue: 1
    pages: "1-10"
    doi: "10.0000/example"
"#;
