use super::{ResultData, ResultKey, Service};

pub(super) fn lookup(key: ResultKey) -> &'static ResultData {
    match key {
        ResultKey::OpensearchBasic => &OPENSEARCH_BASIC,
        ResultKey::OpensearchEnterprise => &OPENSEARCH_ENTERPRISE,
        ResultKey::BedrockKnowledgeBase => &BEDROCK_KNOWLEDGE_BASE,
        ResultKey::BedrockEnterpriseRag => &BEDROCK_ENTERPRISE_RAG,
        ResultKey::OpensearchRag => &OPENSEARCH_RAG,
        ResultKey::PersonalizationService => &PERSONALIZATION_SERVICE,
        ResultKey::ContentRecommendations => &CONTENT_RECOMMENDATIONS,
        ResultKey::CustomRecommendations => &CUSTOM_RECOMMENDATIONS,
        ResultKey::ImageSimilarity => &IMAGE_SIMILARITY,
        ResultKey::TextSimilarity => &TEXT_SIMILARITY,
        ResultKey::BehaviorSimilarity => &BEHAVIOR_SIMILARITY,
        ResultKey::ImageSearch => &IMAGE_SEARCH,
        ResultKey::VideoSearch => &VIDEO_SEARCH,
        ResultKey::MultimodalSearch => &MULTIMODAL_SEARCH,
        ResultKey::CodeSemanticSearch => &CODE_SEMANTIC_SEARCH,
        ResultKey::DocumentationSearch => &DOCUMENTATION_SEARCH,
        ResultKey::CodeSimilarity => &CODE_SIMILARITY,
        ResultKey::WebsiteChatbot => &WEBSITE_CHATBOT,
        ResultKey::CustomerSupportRag => &CUSTOMER_SUPPORT_RAG,
        ResultKey::PublicKnowledgeRag => &PUBLIC_KNOWLEDGE_RAG,
        ResultKey::LegalRag => &LEGAL_RAG,
        ResultKey::MedicalRag => &MEDICAL_RAG,
        ResultKey::TechnicalRag => &TECHNICAL_RAG,
    }
}

static OPENSEARCH_BASIC: ResultData = ResultData {
    title: "Amazon OpenSearch Service - Basic Setup",
    description: "Perfect for small to medium-scale semantic search with straightforward setup and managed infrastructure.",
    services: &[Service {
        name: "Amazon OpenSearch Service",
        description: "Fully managed search and analytics service with built-in vector search capabilities.",
        benefits: &[
            "k-NN vector search with multiple algorithms",
            "Hybrid search combining text and vectors",
            "Real-time indexing and search",
            "Built-in security and encryption",
            "Auto-scaling and multi-AZ support",
        ],
        cost: "$200-$2,000/month for typical workloads (3-node cluster with moderate usage)",
        best_for: "Organizations with < 1M documents, moderate query volume, need for hybrid search",
        link: Some("https://docs.aws.amazon.com/opensearch-service/latest/developerguide/semantic-search.html"),
    }],
};

static OPENSEARCH_ENTERPRISE: ResultData = ResultData {
    title: "Amazon OpenSearch Service - Enterprise Scale",
    description: "Enterprise-grade solution for high-volume semantic search with advanced features and optimization.",
    services: &[Service {
        name: "Amazon OpenSearch Service (Enterprise)",
        description: "Large-scale deployment with advanced configurations for enterprise workloads.",
        benefits: &[
            "Multi-tenant architecture support",
            "Advanced security with SAML/LDAP",
            "Cross-cluster replication",
            "Custom dictionaries and analyzers",
            "Performance optimization tools",
        ],
        cost: "$2,000-$20,000/month depending on scale and features",
        best_for: "Large enterprises, > 1M documents, high query volume, complex security requirements",
        link: Some("https://aws.amazon.com/opensearch-service/features/"),
    }],
};

static BEDROCK_KNOWLEDGE_BASE: ResultData = ResultData {
    title: "Amazon Bedrock Knowledge Bases",
    description: "Rapid prototyping and development with fully managed RAG capabilities and automatic embeddings.",
    services: &[Service {
        name: "Amazon Bedrock Knowledge Bases",
        description: "Serverless RAG service with built-in vector storage and retrieval.",
        benefits: &[
            "Automatic embedding generation",
            "Managed vector storage (OpenSearch Serverless)",
            "Built-in document chunking strategies",
            "Native integration with foundation models",
            "No infrastructure management",
        ],
        cost: "$100-$1,000/month plus embedding and LLM costs",
        best_for: "Rapid prototyping, small to medium datasets, teams wanting managed services",
        link: Some("https://docs.aws.amazon.com/bedrock/latest/userguide/knowledge-base.html"),
    }],
};

static BEDROCK_ENTERPRISE_RAG: ResultData = ResultData {
    title: "Amazon Bedrock - Enterprise RAG Solution",
    description: "High-security, compliant RAG solution for enterprise knowledge management.",
    services: &[Service {
        name: "Amazon Bedrock (Enterprise Setup)",
        description: "Enterprise-grade RAG with comprehensive security and compliance features.",
        benefits: &[
            "VPC endpoint support for private access",
            "Comprehensive audit logging",
            "Data residency controls",
            "Fine-grained access controls",
            "Integration with AWS security services",
        ],
        cost: "$1,000-$10,000/month depending on usage and model selection",
        best_for: "Regulated industries, sensitive data, enterprise compliance requirements",
        link: Some("https://aws.amazon.com/bedrock/security-compliance/"),
    }],
};

static OPENSEARCH_RAG: ResultData = ResultData {
    title: "Custom RAG with OpenSearch",
    description: "Flexible RAG implementation with full control over embeddings, models, and processing.",
    services: &[Service {
        name: "Amazon OpenSearch + Custom RAG Pipeline",
        description: "Build custom RAG solutions with OpenSearch as the vector store.",
        benefits: &[
            "Full control over embedding models",
            "Custom retrieval strategies",
            "Integration with any LLM service",
            "Advanced query processing",
            "Cost optimization flexibility",
        ],
        cost: "$500-$5,000/month for infrastructure plus development costs",
        best_for: "Custom requirements, specific model needs, existing OpenSearch expertise",
        link: Some("https://github.com/aws-samples/amazon-opensearch-service-samples"),
    }],
};

static PERSONALIZATION_SERVICE: ResultData = ResultData {
    title: "Amazon Personalize",
    description: "ML-powered recommendation system for e-commerce and retail applications.",
    services: &[Service {
        name: "Amazon Personalize",
        description: "Fully managed machine learning service for creating recommendation systems.",
        benefits: &[
            "AutoML for recommendation algorithms",
            "Real-time and batch recommendations",
            "A/B testing capabilities",
            "Multiple recommendation types",
            "Business metrics optimization",
        ],
        cost: "$200-$2,000/month based on requests and data size",
        best_for: "E-commerce, retail, content platforms with user interaction data",
        link: Some("https://aws.amazon.com/personalize/getting-started/"),
    }],
};

static CONTENT_RECOMMENDATIONS: ResultData = ResultData {
    title: "Content Recommendation with Vector Search",
    description: "Vector-based content recommendations for media and entertainment platforms.",
    services: &[Service {
        name: "OpenSearch + Custom Content Engine",
        description: "Content similarity matching using vector embeddings and semantic search.",
        benefits: &[
            "Content-based filtering",
            "Semantic content matching",
            "Multi-modal content support",
            "Real-time recommendations",
            "Integration with content catalogs",
        ],
        cost: "$300-$3,000/month depending on content volume",
        best_for: "Media platforms, content sites, article recommendations, video platforms",
        link: Some("https://aws.amazon.com/blogs/machine-learning/"),
    }],
};

static CUSTOM_RECOMMENDATIONS: ResultData = ResultData {
    title: "Custom Vector-Based Recommendations",
    description: "Domain-specific similarity matching with custom embeddings and algorithms.",
    services: &[Service {
        name: "Custom Vector Recommendation System",
        description: "Build specialized recommendation systems using vector similarity.",
        benefits: &[
            "Domain-specific embeddings",
            "Custom similarity metrics",
            "Multi-criteria recommendations",
            "Advanced filtering capabilities",
            "Integration with business logic",
        ],
        cost: "$500-$5,000/month including development and infrastructure",
        best_for: "Specialized domains, B2B applications, complex matching requirements",
        link: Some("https://aws.amazon.com/architecture/machine-learning/"),
    }],
};

static IMAGE_SIMILARITY: ResultData = ResultData {
    title: "Image & Visual Similarity Search",
    description: "Vector-based image similarity matching for visual search and product discovery.",
    services: &[Service {
        name: "Amazon OpenSearch + Image Embeddings",
        description: "Custom image similarity search using pre-trained vision models.",
        benefits: &[
            "Pre-trained vision models (ResNet, EfficientNet)",
            "Custom feature extraction pipelines",
            "Real-time similarity scoring",
            "Integration with S3 for image storage",
            "Scalable indexing and search",
        ],
        cost: "$300-$3,000/month depending on image volume and processing needs",
        best_for: "E-commerce, fashion, real estate, visual content platforms",
        link: Some("https://aws.amazon.com/rekognition/"),
    }],
};

static TEXT_SIMILARITY: ResultData = ResultData {
    title: "Text & Document Similarity",
    description: "Advanced text similarity matching for content deduplication and analysis.",
    services: &[Service {
        name: "Amazon OpenSearch + Text Embeddings",
        description: "Semantic text similarity using transformer-based embeddings.",
        benefits: &[
            "Transformer-based embeddings (BERT, Sentence-BERT)",
            "Language-specific models",
            "Plagiarism and duplicate detection",
            "Cross-lingual similarity matching",
            "Real-time content analysis",
        ],
        cost: "$400-$2,500/month for typical document volumes",
        best_for: "Content platforms, academic institutions, publishing, legal firms",
        link: Some("https://docs.aws.amazon.com/opensearch-service/latest/developerguide/semantic-search.html"),
    }],
};

static BEHAVIOR_SIMILARITY: ResultData = ResultData {
    title: "User Behavior Similarity & Anomaly Detection",
    description: "Detect similar user patterns and anomalies for fraud prevention and personalization.",
    services: &[Service {
        name: "Amazon OpenSearch + Behavioral Analytics",
        description: "User behavior pattern analysis using vector similarity.",
        benefits: &[
            "Real-time fraud detection",
            "User segmentation and clustering",
            "Anomaly detection algorithms",
            "Behavioral pattern recognition",
            "Integration with security systems",
        ],
        cost: "$500-$4,000/month based on user volume and analysis complexity",
        best_for: "Fintech, e-commerce, security applications, user analytics platforms",
        link: Some("https://aws.amazon.com/fraud-detector/"),
    }],
};

static IMAGE_SEARCH: ResultData = ResultData {
    title: "Image Search & Visual Discovery",
    description: "Comprehensive image search solution for visual content discovery.",
    services: &[Service {
        name: "Amazon Rekognition + OpenSearch",
        description: "Fully managed image analysis with custom vector search.",
        benefits: &[
            "Automatic feature extraction",
            "Object and scene detection",
            "Celebrity and text recognition",
            "Custom label detection",
            "Reverse image search capabilities",
        ],
        cost: "$200-$2,000/month plus API costs for image processing",
        best_for: "Media companies, e-commerce, social platforms, digital asset management",
        link: Some("https://aws.amazon.com/rekognition/"),
    }],
};

static VIDEO_SEARCH: ResultData = ResultData {
    title: "Video & Audio Content Search",
    description: "Advanced multimedia search for video and audio content libraries.",
    services: &[Service {
        name: "Amazon Transcribe + Rekognition Video + OpenSearch",
        description: "Multimodal video search combining visual, audio, and text analysis.",
        benefits: &[
            "Automatic speech recognition",
            "Video scene detection",
            "Content moderation",
            "Thumbnail generation",
            "Temporal search capabilities",
        ],
        cost: "$800-$5,000/month depending on video volume and processing requirements",
        best_for: "Media & entertainment, education, surveillance, content creators",
        link: Some("https://aws.amazon.com/media-services/"),
    }],
};

static MULTIMODAL_SEARCH: ResultData = ResultData {
    title: "Multimodal Search (Text + Images + Metadata)",
    description: "Advanced search combining multiple content types and modalities.",
    services: &[Service {
        name: "Amazon Bedrock + OpenSearch Multimodal",
        description: "Next-generation multimodal search using foundation models.",
        benefits: &[
            "Multimodal embeddings (text + image)",
            "Cross-modal search capabilities",
            "Foundation model integration",
            "Unified search interface",
            "Advanced relevance scoring",
        ],
        cost: "$1,000-$8,000/month including foundation model costs",
        best_for: "Research institutions, media companies, advanced AI applications",
        link: Some("https://aws.amazon.com/bedrock/"),
    }],
};

static CODE_SEMANTIC_SEARCH: ResultData = ResultData {
    title: "Semantic Code Search",
    description: "AI-powered code search that understands functionality, not just syntax.",
    services: &[Service {
        name: "Amazon CodeWhisperer + OpenSearch",
        description: "Intelligent code search using ML-powered code understanding.",
        benefits: &[
            "Function-level code embeddings",
            "Cross-language code search",
            "API and library discovery",
            "Code pattern recognition",
            "Integration with IDEs",
        ],
        cost: "$300-$1,500/month for development teams",
        best_for: "Software development teams, open source projects, code repositories",
        link: Some("https://aws.amazon.com/codewhisperer/"),
    }],
};

static DOCUMENTATION_SEARCH: ResultData = ResultData {
    title: "Technical Documentation Search",
    description: "Advanced search for technical documentation and API references.",
    services: &[Service {
        name: "Amazon Bedrock Knowledge Bases for Technical Docs",
        description: "Specialized documentation search with technical context understanding.",
        benefits: &[
            "Technical terminology understanding",
            "API documentation indexing",
            "Code example extraction",
            "Version-aware search",
            "Developer-friendly interfaces",
        ],
        cost: "$200-$1,200/month for technical documentation",
        best_for: "Software companies, API providers, technical documentation sites",
        link: Some("https://docs.aws.amazon.com/bedrock/latest/userguide/knowledge-base.html"),
    }],
};

static CODE_SIMILARITY: ResultData = ResultData {
    title: "Code Similarity & Duplication Detection",
    description: "Detect similar code patterns and identify potential duplications.",
    services: &[Service {
        name: "Amazon CodeGuru + OpenSearch",
        description: "Code analysis and similarity detection for quality and security.",
        benefits: &[
            "Duplicate code detection",
            "Similar pattern identification",
            "Security vulnerability detection",
            "Code quality metrics",
            "Automated code review insights",
        ],
        cost: "$100-$800/month for code analysis",
        best_for: "Enterprise development teams, code quality assurance, security teams",
        link: Some("https://aws.amazon.com/codeguru/"),
    }],
};

static WEBSITE_CHATBOT: ResultData = ResultData {
    title: "Website Chatbot with RAG",
    description: "Basic customer-facing chatbot for FAQ automation and simple queries.",
    services: &[Service {
        name: "Amazon Bedrock + Lex",
        description: "Managed chatbot solution with RAG capabilities.",
        benefits: &[
            "Pre-built conversation flows",
            "Natural language understanding",
            "Multi-channel deployment",
            "Analytics and monitoring",
            "Easy integration with websites",
        ],
        cost: "$100-$800/month for small to medium websites",
        best_for: "Small to medium businesses, FAQ automation, basic customer support",
        link: Some("https://aws.amazon.com/lex/"),
    }],
};

static CUSTOMER_SUPPORT_RAG: ResultData = ResultData {
    title: "Advanced Customer Support RAG",
    description: "Enterprise-grade customer support with complex query handling and escalation.",
    services: &[Service {
        name: "Amazon Connect + Bedrock RAG",
        description: "Full-featured contact center with AI-powered knowledge retrieval.",
        benefits: &[
            "Omnichannel support (voice, chat, email)",
            "Intelligent routing and escalation",
            "Real-time agent assistance",
            "Customer sentiment analysis",
            "Performance analytics and insights",
        ],
        cost: "$1,500-$8,000/month for enterprise support operations",
        best_for: "Large enterprises, complex customer support, multi-channel operations",
        link: Some("https://aws.amazon.com/connect/"),
    }],
};

static PUBLIC_KNOWLEDGE_RAG: ResultData = ResultData {
    title: "Public Knowledge Assistant",
    description: "Large-scale public-facing knowledge systems for information access.",
    services: &[Service {
        name: "Amazon Bedrock + OpenSearch Enterprise",
        description: "Scalable public knowledge system with high availability.",
        benefits: &[
            "High-availability architecture",
            "Global content delivery",
            "Multi-language support",
            "Load balancing and auto-scaling",
            "Public API access",
        ],
        cost: "$3,000-$15,000/month for large-scale public systems",
        best_for: "Government agencies, educational institutions, public information systems",
        link: Some("https://aws.amazon.com/bedrock/"),
    }],
};

static LEGAL_RAG: ResultData = ResultData {
    title: "Legal Research & Compliance RAG",
    description: "Specialized RAG system for legal research, contract analysis, and compliance.",
    services: &[Service {
        name: "Amazon Bedrock + Textract for Legal",
        description: "Legal document analysis with compliance-grade security.",
        benefits: &[
            "Legal document understanding",
            "Contract clause extraction",
            "Regulatory compliance checking",
            "Citation and precedent tracking",
            "Audit trails and data governance",
        ],
        cost: "$2,000-$12,000/month for legal practices",
        best_for: "Law firms, legal departments, compliance teams, regulatory bodies",
        link: Some("https://aws.amazon.com/textract/"),
    }],
};

static MEDICAL_RAG: ResultData = ResultData {
    title: "Healthcare & Medical RAG",
    description: "HIPAA-compliant RAG for medical literature, diagnosis support, and research.",
    services: &[Service {
        name: "Amazon Bedrock + HealthLake",
        description: "HIPAA-compliant medical knowledge system with specialized health AI.",
        benefits: &[
            "HIPAA-compliant infrastructure",
            "Medical terminology understanding",
            "Clinical decision support",
            "Research paper analysis",
            "Integration with health records",
        ],
        cost: "$3,000-$15,000/month for healthcare applications",
        best_for: "Healthcare providers, medical research, pharmaceutical companies",
        link: Some("https://aws.amazon.com/healthlake/"),
    }],
};

static TECHNICAL_RAG: ResultData = ResultData {
    title: "Technical & Engineering RAG",
    description: "Specialized RAG for technical manuals, engineering documentation, and research papers.",
    services: &[Service {
        name: "Amazon Bedrock + Technical Knowledge Base",
        description: "Technical documentation system with engineering-specific understanding.",
        benefits: &[
            "Technical specification parsing",
            "Engineering drawing analysis",
            "Standards and compliance checking",
            "Equipment manual search",
            "Research paper indexing",
        ],
        cost: "$1,000-$6,000/month for technical organizations",
        best_for: "Engineering firms, manufacturing, research institutions, technical support",
        link: Some("https://docs.aws.amazon.com/bedrock/latest/userguide/knowledge-base.html"),
    }],
};
