use super::domain::{EvaluationNotes, RubricCriterion, SkillDefinition};
use super::relevance::SkillKeywordTable;

/// Keywords that associate a blog post with a skill, keyed by skill name.
///
/// Matching is case-insensitive substring containment over title, summary and tags.
pub const SKILL_KEYWORDS: SkillKeywordTable = SkillKeywordTable::new(&[
    (
        "系统工程与部署能力",
        &[
            "部署",
            "系统",
            "工程",
            "devops",
            "docker",
            "kubernetes",
            "ci/cd",
            "infrastructure",
        ],
    ),
    (
        "模型理解与微调能力",
        &["微调", "模型", "fine-tuning", "训练", "模型理解"],
    ),
    (
        "跨模态与多任务融合",
        &[
            "跨模态",
            "多模态",
            "multimodal",
            "多任务",
            "fusion",
            "视觉",
            "语言",
            "图像",
        ],
    ),
    (
        "快速学习与技术更新能力",
        &["学习", "技术", "更新", "新技术", "学习能力", "快速", "适应"],
    ),
    (
        "产品导向与场景思维",
        &[
            "产品",
            "场景",
            "应用",
            "落地",
            "nlp",
            "自然语言处理",
            "产品思维",
            "业务",
        ],
    ),
    (
        "技术影响力与表达力",
        &["开源", "分享", "技术", "影响力", "表达", "open source"],
    ),
]);

pub const EVALUATION_NOTES: EvaluationNotes = EvaluationNotes {
    summary: "本技能评分通过AI模型评估生成，评估模型综合考虑了以下因素：",
    models: "GPT-4 / Claude-3.5",
    basis: "项目经验、技术博客、代码仓库、技术分享等",
    dimensions: "理论深度、实践经验、项目复杂度、技术影响力",
    cadence: "根据最新项目和技术输出定期更新",
    disclaimer: "评分仅供参考，实际能力会随着项目经验和技术学习持续提升。",
};

/// The fixed set of skills rendered on the radar chart and skill pages.
#[derive(Debug, Clone, Copy)]
pub struct SkillCatalog {
    skills: &'static [SkillDefinition],
    keywords: SkillKeywordTable,
}

impl SkillCatalog {
    pub fn standard() -> Self {
        Self {
            skills: STANDARD_SKILLS,
            keywords: SKILL_KEYWORDS,
        }
    }

    pub fn skills(&self) -> &'static [SkillDefinition] {
        self.skills
    }

    pub fn keywords(&self) -> &SkillKeywordTable {
        &self.keywords
    }

    pub fn find_by_key(&self, key: &str) -> Option<&'static SkillDefinition> {
        let key = key.trim();
        self.skills
            .iter()
            .find(|skill| skill.key.eq_ignore_ascii_case(key))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'static SkillDefinition> {
        self.skills.iter().find(|skill| skill.name == name.trim())
    }
}

const STANDARD_SKILLS: &[SkillDefinition] = &[
    SkillDefinition {
        key: "systems",
        name: "系统工程与部署能力",
        score: 80,
        introduction: &[
            "在系统工程与部署方面，我关注模型从实验环境走向生产环境的完整链路，\
             包括服务化封装、容器化部署、资源调度与监控告警。",
            "我熟悉 Docker、Kubernetes 与 CI/CD 流水线，能够为推理服务设计合理的扩缩容策略，\
             在延迟、吞吐与成本之间做出权衡，并保障线上服务的稳定性。",
        ],
        rubric: &[
            RubricCriterion {
                label: "服务化能力",
                detail: "将模型封装为稳定可靠的在线服务",
            },
            RubricCriterion {
                label: "容器与编排",
                detail: "Docker、Kubernetes 等基础设施的使用经验",
            },
            RubricCriterion {
                label: "持续交付",
                detail: "CI/CD 流水线的搭建与维护",
            },
            RubricCriterion {
                label: "性能优化",
                detail: "推理加速、量化与资源利用率优化",
            },
            RubricCriterion {
                label: "可观测性",
                detail: "日志、指标与告警体系的建设",
            },
            RubricCriterion {
                label: "稳定性保障",
                detail: "故障排查与高可用方案的落地经验",
            },
        ],
    },
    SkillDefinition {
        key: "finetuning",
        name: "模型理解与微调能力",
        score: 85,
        introduction: &[
            "在模型理解与微调方面，我深入理解 Transformer 架构与预训练语言模型的工作机制，\
             能够根据任务特点选择合适的基座模型与训练策略。",
            "我具备全参数微调与 LoRA 等参数高效微调的实践经验，熟悉数据构造、超参数调优与效果评估，\
             能够分析模型行为并针对性地改进训练方案。",
        ],
        rubric: &[
            RubricCriterion {
                label: "原理理解",
                detail: "对模型结构与训练机制的理解深度",
            },
            RubricCriterion {
                label: "微调实践",
                detail: "全参数微调与参数高效微调的实践经验",
            },
            RubricCriterion {
                label: "数据工程",
                detail: "训练数据的构造、清洗与增强能力",
            },
            RubricCriterion {
                label: "效果评估",
                detail: "设计评测方案并分析模型表现",
            },
            RubricCriterion {
                label: "问题诊断",
                detail: "定位过拟合、灾难性遗忘等训练问题",
            },
            RubricCriterion {
                label: "技术创新",
                detail: "在训练方法上的改进与优化",
            },
        ],
    },
    SkillDefinition {
        key: "multimodal",
        name: "跨模态与多任务融合",
        score: 75,
        introduction: &[
            "在跨模态与多任务融合方面，我专注于将不同模态（文本、图像、语音等）的信息进行有效融合，\
             并设计能够同时处理多个相关任务的统一模型架构。我深入研究视觉-语言理解、多模态预训练、\
             跨模态检索等前沿技术。",
            "我具备设计和实现多任务学习框架的能力，能够通过共享表示学习提升模型效率。\
             在跨模态融合方面，我熟悉注意力机制、特征对齐、模态转换等关键技术，\
             能够构建端到端的跨模态理解系统。",
        ],
        rubric: &[
            RubricCriterion {
                label: "跨模态理解能力",
                detail: "文本-图像、文本-语音等跨模态理解技术掌握",
            },
            RubricCriterion {
                label: "多任务学习",
                detail: "设计统一架构处理多个相关任务的能力",
            },
            RubricCriterion {
                label: "特征融合技术",
                detail: "不同模态特征的融合与对齐方法",
            },
            RubricCriterion {
                label: "预训练模型应用",
                detail: "CLIP、ALIGN等跨模态预训练模型的使用",
            },
            RubricCriterion {
                label: "实际项目经验",
                detail: "跨模态应用场景的落地实践",
            },
            RubricCriterion {
                label: "技术创新",
                detail: "在跨模态融合方面的创新与优化",
            },
        ],
    },
    SkillDefinition {
        key: "learning",
        name: "快速学习与技术更新能力",
        score: 88,
        introduction: &[
            "在快速学习与技术更新方面，我保持对前沿论文与开源项目的持续跟踪，\
             能够在较短时间内掌握新的模型、框架与工具。",
            "我习惯通过复现实验与撰写笔记来消化新技术，并将其快速应用到实际项目中，\
             适应技术栈与业务方向的变化。",
        ],
        rubric: &[
            RubricCriterion {
                label: "信息获取",
                detail: "跟踪论文、社区与行业动态的广度",
            },
            RubricCriterion {
                label: "上手速度",
                detail: "掌握新框架与新工具所需的时间",
            },
            RubricCriterion {
                label: "知识迁移",
                detail: "将新技术应用到现有问题的能力",
            },
            RubricCriterion {
                label: "复现能力",
                detail: "独立复现论文与开源方案的能力",
            },
            RubricCriterion {
                label: "知识沉淀",
                detail: "通过笔记与总结形成体系化认知",
            },
            RubricCriterion {
                label: "适应能力",
                detail: "面对技术栈与方向变化时的调整速度",
            },
        ],
    },
    SkillDefinition {
        key: "product",
        name: "产品导向与场景思维",
        score: 82,
        introduction: &[
            "在产品导向与场景思维方面，我始终将技术能力与业务需求紧密结合。\
             我具备从用户场景出发，设计AI解决方案的能力，能够将复杂的AI技术转化为\
             解决实际问题的产品功能。",
            "我擅长分析业务场景，理解用户痛点，设计符合产品定位的AI功能。\
             在NLP领域，我深入理解文本理解、信息抽取、对话系统等技术的应用场景，\
             能够根据不同的业务需求选择合适的技术方案，并考虑性能、成本、用户体验等因素。",
        ],
        rubric: &[
            RubricCriterion {
                label: "场景理解",
                detail: "对业务场景和用户需求的理解深度",
            },
            RubricCriterion {
                label: "产品思维",
                detail: "将技术转化为产品功能的能力",
            },
            RubricCriterion {
                label: "技术选型",
                detail: "根据场景选择合适技术方案的能力",
            },
            RubricCriterion {
                label: "落地实践",
                detail: "技术在实际产品中的落地经验",
            },
            RubricCriterion {
                label: "用户体验",
                detail: "考虑用户体验和产品体验的能力",
            },
            RubricCriterion {
                label: "业务价值",
                detail: "技术方案带来的业务价值评估",
            },
        ],
    },
    SkillDefinition {
        key: "influence",
        name: "技术影响力与表达力",
        score: 70,
        introduction: &[
            "在技术影响力与表达方面，我坚持通过博客、开源项目与技术分享输出实践经验，\
             把复杂的技术问题讲清楚、讲透彻。",
            "我重视文档与代码的可读性，乐于参与社区讨论与开源协作，\
             希望通过持续的表达与分享帮助更多开发者。",
        ],
        rubric: &[
            RubricCriterion {
                label: "技术写作",
                detail: "博客与文档的质量与持续性",
            },
            RubricCriterion {
                label: "开源贡献",
                detail: "开源项目的参与与维护情况",
            },
            RubricCriterion {
                label: "分享交流",
                detail: "技术分享与社区交流的频率",
            },
            RubricCriterion {
                label: "表达清晰度",
                detail: "将复杂问题讲清楚的能力",
            },
            RubricCriterion {
                label: "协作能力",
                detail: "跨团队沟通与协作的效果",
            },
            RubricCriterion {
                label: "影响范围",
                detail: "输出内容被引用与采纳的情况",
            },
        ],
    },
];
